//! The active circuit element and its property descriptors.

use crate::error::Result;

use super::interface;

interface! {
    /// Whatever element is currently active in the circuit, regardless of class.
    CktElement
}

interface! {
    /// Name, value and description of one property of the active element.
    DssProperty
}

impl<'a> CktElement<'a> {
    dss_properties! { "CktElement";
        /// Full name, `Class.name`.
        ro string name => Name;
        rw string display_name => DisplayName;
        ro string guid => GUID;
        ro i32 handle => Handle;
        rw bool enabled => Enabled;
        rw f64 normal_amps => NormalAmps;
        rw f64 emerg_amps => EmergAmps;
        ro i32 num_conductors => NumConductors;
        ro i32 num_controls => NumControls;
        ro i32 num_phases => NumPhases;
        ro i32 num_properties => NumProperties;
        ro i32 num_terminals => NumTerminals;
        ro i32 ocp_dev_index => OCPDevIndex;
        ro i32 ocp_dev_type => OCPDevType;
        ro bool has_ocp_device => HasOCPDevice;
        ro bool has_switch_control => HasSwitchControl;
        ro bool has_volt_control => HasVoltControl;
        ro bool is_isolated => IsIsolated;
        ro string energy_meter => EnergyMeter;
        /// Bus connection of each terminal.
        rw strings bus_names => BusNames;
        ro strings all_property_names => AllPropertyNames;
        ro strings all_variable_names => AllVariableNames;
        ro f64s all_variable_values => AllVariableValues;
        ro complexes currents => Currents;
        ro f64s currents_mag_ang => CurrentsMagAng;
        ro complexes voltages => Voltages;
        ro f64s voltages_mag_ang => VoltagesMagAng;
        /// Power into each conductor of each terminal (kW, kvar).
        ro complexes powers => Powers;
        ro complex losses => Losses;
        ro complexes phase_losses => PhaseLosses;
        ro f64s seq_currents => SeqCurrents;
        ro complexes seq_powers => SeqPowers;
        ro f64s seq_voltages => SeqVoltages;
        ro complexes cplx_seq_currents => CplxSeqCurrents;
        ro complexes cplx_seq_voltages => CplxSeqVoltages;
        ro f64s residuals => Residuals;
        ro complexes total_powers => TotalPowers;
        /// Primitive admittance matrix, row-major.
        ro complexes yprim => Yprim;
        ro i32s node_order => NodeOrder;
        ro i32s node_ref => NodeRef;
    }

    /// Activate a circuit element by 0-based index.
    pub fn select_index(self, index: i32) -> Result<Self> {
        self.api.set_i32("Circuit_SetCktElementIndex", index)?;
        Ok(self)
    }

    /// Activate a circuit element by full name.
    pub fn select(self, full_name: &str) -> Result<Self> {
        self.api.set_string("Circuit_SetCktElementName", full_name)?;
        Ok(self)
    }

    /// Run `f` with each circuit element active.
    pub fn map_each<T, F>(&self, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(&CktElement<'a>) -> Result<T>,
    {
        let count = self.api.get_i32("Circuit_Get_NumCktElements")?;
        let mut out = Vec::with_capacity(count.max(0) as usize);
        for index in 0..count {
            self.api.set_i32("Circuit_SetCktElementIndex", index)?;
            out.push(f(self)?);
        }
        Ok(out)
    }

    /// Full name of the `i`-th controller attached to this element (1-based).
    pub fn controller(&self, i: i32) -> Result<String> {
        self.api.string_from_i32("CktElement_Get_Controller", i)
    }

    /// Open a terminal; phase 0 opens every conductor of the terminal.
    pub fn open(&self, terminal: i32, phase: i32) -> Result<()> {
        self.api.call_i32_pair("CktElement_Open", terminal, phase)
    }

    pub fn close(&self, terminal: i32, phase: i32) -> Result<()> {
        self.api.call_i32_pair("CktElement_Close", terminal, phase)
    }

    pub fn is_open(&self, terminal: i32, phase: i32) -> Result<bool> {
        self.api.bool_from_i32_pair("CktElement_IsOpen", terminal, phase)
    }

    /// State variable by name. Returns `(value, code)`; a nonzero code means
    /// no such variable or not a PC element.
    pub fn variable(&self, name: &str) -> Result<(f64, i32)> {
        self.api.f64_by_name("CktElement_Get_Variable", name)
    }

    /// State variable by 1-based index, see [`CktElement::variable`].
    pub fn variable_i(&self, index: i32) -> Result<(f64, i32)> {
        self.api.f64_by_index("CktElement_Get_Variablei", index)
    }

    /// Set a state variable by name; returns the code.
    pub fn set_variable(&self, name: &str, value: f64) -> Result<i32> {
        self.api.set_f64_by_name("CktElement_Set_Variable", name, value)
    }

    pub fn set_variable_i(&self, index: i32, value: f64) -> Result<i32> {
        self.api.set_f64_by_index("CktElement_Set_Variablei", index, value)
    }

    /// Descriptor of property `index` (0-based) of this element.
    pub fn property(&self, index: i32) -> Result<DssProperty<'a>> {
        self.api.set_i32("DSSProperty_Set_Index", index)?;
        Ok(DssProperty::new(self.api))
    }

    /// Descriptor of the property called `name`.
    pub fn property_by_name(&self, name: &str) -> Result<DssProperty<'a>> {
        self.api.set_string("DSSProperty_Set_Name", name)?;
        Ok(DssProperty::new(self.api))
    }
}

impl DssProperty<'_> {
    dss_properties! { "DSSProperty";
        ro string name => Name;
        ro string description => Description;
        /// Value of the property as the engine formats it.
        rw string val => Val;
    }
}
