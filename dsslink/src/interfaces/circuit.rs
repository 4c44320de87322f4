//! The active circuit and the accessors for its sub-interfaces.

use num_complex::Complex64;

use crate::enums::{DssSaveFlags, JsonFlags};
use crate::error::Result;

use super::{
    interface, Bus, CapControls, Capacitors, CktElement, CnData, CtrlQueue, DssElement,
    DssimComs, Fuses, Generators, GicSources, ISources, LineCodes, LineGeometries, LineSpacings,
    LoadShapes, Loads, Lines, Meters, Monitors, Parallel, PdElements, PvSystems, Reactors,
    Reclosers, ReduceCkt, RegControls, Relays, Sensors, Settings, Solution, Storages, SwtControls,
    Topology, Transformers, TsData, Vsources, WireData, XyCurves,
};

interface! {
    Circuit
}

macro_rules! sub_interfaces {
    ($($method:ident -> $ty:ident;)*) => {
        $(
            pub fn $method(&self) -> $ty<'a> {
                $ty::new(self.api)
            }
        )*
    };
}

impl<'a> Circuit<'a> {
    sub_interfaces! {
        active_bus -> Bus;
        active_element -> CktElement;
        solution -> Solution;
        settings -> Settings;
        loads -> Loads;
        lines -> Lines;
        transformers -> Transformers;
        capacitors -> Capacitors;
        generators -> Generators;
        vsources -> Vsources;
        load_shapes -> LoadShapes;
        monitors -> Monitors;
        meters -> Meters;
        fuses -> Fuses;
        swt_controls -> SwtControls;
        reg_controls -> RegControls;
        cap_controls -> CapControls;
        pv_systems -> PvSystems;
        line_codes -> LineCodes;
        xy_curves -> XyCurves;
        pd_elements -> PdElements;
        ctrl_queue -> CtrlQueue;
        topology -> Topology;
        storages -> Storages;
        reactors -> Reactors;
        relays -> Relays;
        reclosers -> Reclosers;
        sensors -> Sensors;
        isources -> ISources;
        gic_sources -> GicSources;
        line_geometries -> LineGeometries;
        line_spacings -> LineSpacings;
        wire_data -> WireData;
        cn_data -> CnData;
        ts_data -> TsData;
        reduce_ckt -> ReduceCkt;
        parallel -> Parallel;
        active_dss_element -> DssElement;
        dssim_coms -> DssimComs;
    }

    dss_properties! { "Circuit";
        ro string name => Name;
        ro i32 num_buses => NumBuses;
        ro i32 num_ckt_elements => NumCktElements;
        ro i32 num_nodes => NumNodes;
        /// Total losses (W, var).
        ro complex losses => Losses;
        ro complex line_losses => LineLosses;
        ro complex substation_losses => SubstationLosses;
        /// Total power at the source (kW, kvar).
        ro complex total_power => TotalPower;
        ro strings all_bus_names => AllBusNames;
        ro strings all_element_names => AllElementNames;
        ro strings all_node_names => AllNodeNames;
        ro complexes all_bus_volts => AllBusVolts;
        ro f64s all_bus_vmag => AllBusVmag;
        ro f64s all_bus_vmag_pu => AllBusVmagPu;
        ro f64s all_bus_distances => AllBusDistances;
        ro f64s all_node_distances => AllNodeDistances;
        /// Losses of every element, in element order.
        ro complexes all_element_losses => AllElementLosses;
        /// Node names in the order of the system Y matrix.
        ro strings y_node_order => YNodeOrder;
        ro complexes y_currents => YCurrents;
        ro complexes y_node_varray => YNodeVarray;
        /// Dense system Y matrix, row-major. Only for small systems.
        ro complexes system_y => SystemY;
        /// Index of the parent PD element of the active element, 0 if none.
        ro i32 parent_pd_element => ParentPDElement;
    }

    /// Activate a bus by name; returns its 0-based index, or a negative value
    /// when it does not exist.
    pub fn set_active_bus(&self, name: &str) -> Result<i32> {
        self.api.i32_from_str("Circuit_SetActiveBus", name)
    }

    /// Activate a bus by 0-based index.
    pub fn set_active_bus_i(&self, index: i32) -> Result<i32> {
        self.api.i32_from_i32("Circuit_SetActiveBusi", index)
    }

    /// Activate an element by full name, e.g. `Line.650632`.
    pub fn set_active_element(&self, full_name: &str) -> Result<i32> {
        self.api.i32_from_str("Circuit_SetActiveElement", full_name)
    }

    /// Activate a class by name; returns its index.
    pub fn set_active_class(&self, class_name: &str) -> Result<i32> {
        self.api.i32_from_str("Circuit_SetActiveClass", class_name)
    }

    /// Iterate the elements of the active class.
    pub fn first_element(&self) -> Result<i32> {
        self.api.get_i32("Circuit_FirstElement")
    }

    pub fn next_element(&self) -> Result<i32> {
        self.api.get_i32("Circuit_NextElement")
    }

    pub fn first_pc_element(&self) -> Result<i32> {
        self.api.get_i32("Circuit_FirstPCElement")
    }

    pub fn next_pc_element(&self) -> Result<i32> {
        self.api.get_i32("Circuit_NextPCElement")
    }

    pub fn first_pd_element(&self) -> Result<i32> {
        self.api.get_i32("Circuit_FirstPDElement")
    }

    pub fn next_pd_element(&self) -> Result<i32> {
        self.api.get_i32("Circuit_NextPDElement")
    }

    pub fn all_node_names_by_phase(&self, phase: i32) -> Result<Vec<String>> {
        self.api.get_string_array_by_i32("Circuit_Get_AllNodeNamesByPhase", phase)
    }

    pub fn all_node_vmag_by_phase(&self, phase: i32) -> Result<Vec<f64>> {
        self.api.get_f64_array_by_i32("Circuit_Get_AllNodeVmagByPhase", phase)
    }

    pub fn all_node_vmag_pu_by_phase(&self, phase: i32) -> Result<Vec<f64>> {
        self.api.get_f64_array_by_i32("Circuit_Get_AllNodeVmagPUByPhase", phase)
    }

    pub fn all_node_distances_by_phase(&self, phase: i32) -> Result<Vec<f64>> {
        self.api.get_f64_array_by_i32("Circuit_Get_AllNodeDistancesByPhase", phase)
    }

    /// Losses of the elements with the given 0-based indices.
    pub fn element_losses(&self, indices: &[i32]) -> Result<Vec<Complex64>> {
        let pairs = self.api.get_f64_array_by_i32s("Circuit_Get_ElementLosses", indices)?;
        crate::codec::pairs_to_complex(&pairs)
    }

    /// Load multiplier at which the first bus voltage limit is hit, searching
    /// upward from `start` in steps of `increment`.
    pub fn capacity(&self, start: f64, increment: f64) -> Result<f64> {
        self.api.f64_from_f64_pair("Circuit_Capacity", start, increment)
    }

    /// Enable an element by full name.
    pub fn enable(&self, name: &str) -> Result<()> {
        self.api.set_string("Circuit_Enable", name)
    }

    pub fn disable(&self, name: &str) -> Result<()> {
        self.api.set_string("Circuit_Disable", name)
    }

    /// Sample all meters and monitors.
    pub fn sample(&self) -> Result<()> {
        self.api.call("Circuit_Sample")
    }

    pub fn save_sample(&self) -> Result<()> {
        self.api.call("Circuit_SaveSample")
    }

    pub fn update_storage(&self) -> Result<()> {
        self.api.call("Circuit_UpdateStorage")
    }

    pub fn end_of_time_step_update(&self) -> Result<()> {
        self.api.call("Circuit_EndOfTimeStepUpdate")
    }

    /// The whole circuit as JSON.
    pub fn to_json(&self, flags: JsonFlags) -> Result<String> {
        self.api.string_from_i32("Circuit_ToJSON", flags.bits())
    }

    /// Save the circuit as a script. With [`DssSaveFlags::TO_STRING`] the
    /// script is returned instead of written under `dir_or_file`.
    pub fn save(&self, dir_or_file: &str, flags: DssSaveFlags) -> Result<String> {
        self.api
            .string_from_str_u32("Circuit_Save", dir_or_file, flags.bits())
    }

    /// Load a circuit from the JSON produced by [`Circuit::to_json`].
    pub fn from_json(&self, data: &str, flags: JsonFlags) -> Result<()> {
        self.api.call_str_i32("Circuit_FromJSON", data, flags.bits())
    }
}
