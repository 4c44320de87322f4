//! Transformer elements. Winding-level properties apply to the active
//! winding, selected with [`Transformers::set_wdg`].

use super::interface;

interface! {
    Transformers, iterable "Transformers"
}

impl Transformers<'_> {
    dss_properties! { "Transformers";
        rw i32 num_windings => NumWindings;
        /// Active winding, 1-based.
        rw i32 wdg => Wdg;
        rw f64 kv => kV;
        rw f64 kva => kVA;
        rw f64 r => R;
        rw f64 rdc_ohms => RdcOhms;
        rw f64 rneut => Rneut;
        rw f64 xneut => Xneut;
        /// Per-unit tap of the active winding.
        rw f64 tap => Tap;
        rw f64 min_tap => MinTap;
        rw f64 max_tap => MaxTap;
        rw i32 num_taps => NumTaps;
        rw f64 xhl => Xhl;
        rw f64 xht => Xht;
        rw f64 xlt => Xlt;
        rw bool is_delta => IsDelta;
        rw string xfmr_code => XfmrCode;
        rw i32 core_type => CoreType;
        ro complexes wdg_voltages => WdgVoltages;
        ro complexes wdg_currents => WdgCurrents;
        ro string str_wdg_currents => strWdgCurrents;
        /// Total, load and no-load losses of the active transformer.
        ro complexes losses_by_type => LossesByType;
        ro complexes all_losses_by_type => AllLossesByType;
    }
}
