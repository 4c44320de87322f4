//! Global engine settings of the active circuit.

use super::interface;

interface! {
    Settings
}

impl Settings<'_> {
    dss_properties! { "Settings";
        /// Prevents energy meter zones from being rebuilt on circuit changes.
        rw bool zone_lock => ZoneLock;
        rw bool allow_duplicates => AllowDuplicates;
        rw bool control_trace => ControlTrace;
        rw bool trapezoidal => Trapezoidal;
        rw bool iterate_disabled => IterateDisabled;
        rw bool loads_terminal_check => LoadsTerminalCheck;
        /// `0` multiphase, `1` positive sequence.
        rw i32 ckt_model => CktModel;
        rw string auto_bus_list => AutoBusList;
        rw string price_curve => PriceCurve;
        rw f64 price_signal => PriceSignal;
        rw f64 norm_vmin_pu => NormVminpu;
        rw f64 norm_vmax_pu => NormVmaxpu;
        rw f64 emerg_vmin_pu => EmergVminpu;
        rw f64 emerg_vmax_pu => EmergVmaxpu;
        rw f64 loss_weight => LossWeight;
        rw f64 ue_weight => UEweight;
        /// Energy meter registers summed into the losses figure.
        rw i32s loss_regs => LossRegs;
        rw i32s ue_regs => UEregs;
        /// Voltage bases (kV, line-to-line) used by `calcvoltagebases`.
        rw f64s voltage_bases => VoltageBases;
        /// Sets the allocation factor of every load.
        wo f64 allocation_factors => AllocationFactors;
    }
}
