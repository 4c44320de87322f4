//! The COM-compatible object surface.
//!
//! [`Dss`] owns one engine context. Every other interface is a cheap view
//! borrowing that context's [`crate::Api`]; creating one makes no native call.
//! Collection interfaces implement [`crate::Iterable`] and operate on the
//! engine's active element of their class.

pub mod active_class;
pub mod bus;
pub mod capacitors;
pub mod capcontrols;
pub mod circuit;
pub mod cktelement;
pub mod ctrlqueue;
pub mod dss;
pub mod dss_element;
pub mod dssim_coms;
pub mod error_state;
pub mod executive;
pub mod fuses;
pub mod generators;
pub mod gicsources;
pub mod isources;
pub mod linecodes;
pub mod linegeometries;
pub mod lines;
pub mod linespacings;
pub mod loads;
pub mod loadshapes;
pub mod meters;
pub mod monitors;
pub mod parallel;
pub mod parser;
pub mod pdelements;
pub mod pvsystems;
pub mod reactors;
pub mod reclosers;
pub mod reduce_ckt;
pub mod regcontrols;
pub mod relays;
pub mod sensors;
pub mod settings;
pub mod solution;
pub mod storages;
pub mod swtcontrols;
pub mod text;
pub mod topology;
pub mod transformers;
pub mod vsources;
pub mod wiredata;
pub mod xycurves;
pub mod zip;

pub use active_class::ActiveClass;
pub use bus::Bus;
pub use capacitors::Capacitors;
pub use capcontrols::CapControls;
pub use circuit::Circuit;
pub use cktelement::{CktElement, DssProperty};
pub use ctrlqueue::CtrlQueue;
pub use dss::Dss;
pub use dss_element::DssElement;
pub use dssim_coms::DssimComs;
pub use error_state::ErrorState;
pub use executive::Executive;
pub use fuses::Fuses;
pub use generators::Generators;
pub use gicsources::GicSources;
pub use isources::ISources;
pub use linecodes::LineCodes;
pub use linegeometries::LineGeometries;
pub use lines::Lines;
pub use linespacings::LineSpacings;
pub use loads::Loads;
pub use loadshapes::LoadShapes;
pub use meters::Meters;
pub use monitors::Monitors;
pub use parallel::Parallel;
pub use parser::Parser;
pub use pdelements::PdElements;
pub use pvsystems::PvSystems;
pub use reactors::Reactors;
pub use reclosers::Reclosers;
pub use reduce_ckt::ReduceCkt;
pub use regcontrols::RegControls;
pub use relays::Relays;
pub use sensors::Sensors;
pub use settings::Settings;
pub use solution::Solution;
pub use storages::Storages;
pub use swtcontrols::SwtControls;
pub use text::Text;
pub use topology::Topology;
pub use transformers::Transformers;
pub use vsources::Vsources;
pub use wiredata::{CnData, TsData, WireData};
pub use xycurves::XyCurves;
pub use zip::Zip;

/// Declare a view type holding `api: &Api`, with `new`. Given a class prefix
/// it also implements [`crate::Iterable`] and, unless marked `unindexed`,
/// [`crate::Indexed`].
macro_rules! interface {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        pub struct $name<'a> {
            api: &'a $crate::api::Api,
        }

        impl<'a> $name<'a> {
            pub fn new(api: &'a $crate::api::Api) -> Self {
                Self { api }
            }
        }

        impl std::fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, iterable $class:literal, unindexed) => {
        $crate::interfaces::interface!($(#[$meta])* $name);

        impl $crate::iteration::Iterable for $name<'_> {
            const CLASS: &'static str = $class;

            fn api(&self) -> &$crate::api::Api {
                self.api
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, iterable $class:literal) => {
        $crate::interfaces::interface!($(#[$meta])* $name, iterable $class, unindexed);

        impl $crate::iteration::Indexed for $name<'_> {}
    };
}

pub(crate) use interface;
