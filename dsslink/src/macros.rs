//! Accessor generation for the interface types.
//!
//! `dss_properties!` is invoked inside an `impl` block of a type with an
//! `api: &Api` field. Each row reads
//!
//! ```text
//! <access> <kind> <rust_name> => <NativeName>;
//! ```
//!
//! where access is `ro`, `rw` or `wo` and kind is one of `f64`, `i32`, `bool`,
//! `string`, `f64s`, `i32s`, `i8s`, `strings`, `complex`, `complexes`. The
//! getter is `rust_name`, the setter `set_rust_name`; the native symbols are
//! `<Class>_Get_<NativeName>` and `<Class>_Set_<NativeName>`.

macro_rules! dss_properties {
    ($class:literal; $($(#[$meta:meta])* $access:ident $kind:ident $name:ident => $native:ident;)*) => {
        $(
            dss_properties!(@access $access, $class, [$(#[$meta])*], $kind, $name, $native);
        )*
    };

    (@access ro, $class:literal, [$($attr:tt)*], $kind:ident, $name:ident, $native:ident) => {
        dss_properties!(@get $kind, $class, [$($attr)*], $name, $native);
    };
    (@access rw, $class:literal, [$($attr:tt)*], $kind:ident, $name:ident, $native:ident) => {
        dss_properties!(@get $kind, $class, [$($attr)*], $name, $native);
        dss_properties!(@set $kind, $class, $name, $native);
    };
    (@access wo, $class:literal, [$($attr:tt)*], $kind:ident, $name:ident, $native:ident) => {
        dss_properties!(@set $kind, $class, $name, $native);
    };

    (@get f64, $class:literal, [$($attr:tt)*], $name:ident, $native:ident) => {
        $($attr)*
        pub fn $name(&self) -> $crate::Result<f64> {
            self.api.get_f64(concat!($class, "_Get_", stringify!($native)))
        }
    };
    (@get i32, $class:literal, [$($attr:tt)*], $name:ident, $native:ident) => {
        $($attr)*
        pub fn $name(&self) -> $crate::Result<i32> {
            self.api.get_i32(concat!($class, "_Get_", stringify!($native)))
        }
    };
    (@get bool, $class:literal, [$($attr:tt)*], $name:ident, $native:ident) => {
        $($attr)*
        pub fn $name(&self) -> $crate::Result<bool> {
            self.api.get_bool(concat!($class, "_Get_", stringify!($native)))
        }
    };
    (@get string, $class:literal, [$($attr:tt)*], $name:ident, $native:ident) => {
        $($attr)*
        pub fn $name(&self) -> $crate::Result<String> {
            self.api.get_string(concat!($class, "_Get_", stringify!($native)))
        }
    };
    (@get f64s, $class:literal, [$($attr:tt)*], $name:ident, $native:ident) => {
        $($attr)*
        pub fn $name(&self) -> $crate::Result<Vec<f64>> {
            self.api.get_f64_array(concat!($class, "_Get_", stringify!($native)))
        }
    };
    (@get i32s, $class:literal, [$($attr:tt)*], $name:ident, $native:ident) => {
        $($attr)*
        pub fn $name(&self) -> $crate::Result<Vec<i32>> {
            self.api.get_i32_array(concat!($class, "_Get_", stringify!($native)))
        }
    };
    (@get i8s, $class:literal, [$($attr:tt)*], $name:ident, $native:ident) => {
        $($attr)*
        pub fn $name(&self) -> $crate::Result<Vec<i8>> {
            self.api.get_i8_array(concat!($class, "_Get_", stringify!($native)))
        }
    };
    (@get strings, $class:literal, [$($attr:tt)*], $name:ident, $native:ident) => {
        $($attr)*
        pub fn $name(&self) -> $crate::Result<Vec<String>> {
            self.api.get_string_array(concat!($class, "_Get_", stringify!($native)))
        }
    };
    (@get complex, $class:literal, [$($attr:tt)*], $name:ident, $native:ident) => {
        $($attr)*
        pub fn $name(&self) -> $crate::Result<::num_complex::Complex64> {
            self.api.get_complex(concat!($class, "_Get_", stringify!($native)))
        }
    };
    (@get complexes, $class:literal, [$($attr:tt)*], $name:ident, $native:ident) => {
        $($attr)*
        pub fn $name(&self) -> $crate::Result<Vec<::num_complex::Complex64>> {
            self.api.get_complex_array(concat!($class, "_Get_", stringify!($native)))
        }
    };

    (@set f64, $class:literal, $name:ident, $native:ident) => {
        ::paste::paste! {
            pub fn [<set_ $name>](&self, value: f64) -> $crate::Result<()> {
                self.api.set_f64(concat!($class, "_Set_", stringify!($native)), value)
            }
        }
    };
    (@set i32, $class:literal, $name:ident, $native:ident) => {
        ::paste::paste! {
            pub fn [<set_ $name>](&self, value: i32) -> $crate::Result<()> {
                self.api.set_i32(concat!($class, "_Set_", stringify!($native)), value)
            }
        }
    };
    (@set bool, $class:literal, $name:ident, $native:ident) => {
        ::paste::paste! {
            pub fn [<set_ $name>](&self, value: bool) -> $crate::Result<()> {
                self.api.set_bool(concat!($class, "_Set_", stringify!($native)), value)
            }
        }
    };
    (@set string, $class:literal, $name:ident, $native:ident) => {
        ::paste::paste! {
            pub fn [<set_ $name>](&self, value: &str) -> $crate::Result<()> {
                self.api.set_string(concat!($class, "_Set_", stringify!($native)), value)
            }
        }
    };
    (@set f64s, $class:literal, $name:ident, $native:ident) => {
        ::paste::paste! {
            pub fn [<set_ $name>](&self, values: &[f64]) -> $crate::Result<()> {
                self.api.set_f64_array(concat!($class, "_Set_", stringify!($native)), values)
            }
        }
    };
    (@set i32s, $class:literal, $name:ident, $native:ident) => {
        ::paste::paste! {
            pub fn [<set_ $name>](&self, values: &[i32]) -> $crate::Result<()> {
                self.api.set_i32_array(concat!($class, "_Set_", stringify!($native)), values)
            }
        }
    };
    (@set strings, $class:literal, $name:ident, $native:ident) => {
        ::paste::paste! {
            pub fn [<set_ $name>]<S: AsRef<str>>(&self, values: &[S]) -> $crate::Result<()> {
                self.api.set_string_array(concat!($class, "_Set_", stringify!($native)), values)
            }
        }
    };
    (@set complex, $class:literal, $name:ident, $native:ident) => {
        ::paste::paste! {
            pub fn [<set_ $name>](&self, value: ::num_complex::Complex64) -> $crate::Result<()> {
                self.api.set_complex_array(concat!($class, "_Set_", stringify!($native)), &[value])
            }
        }
    };
    (@set complexes, $class:literal, $name:ident, $native:ident) => {
        ::paste::paste! {
            pub fn [<set_ $name>](&self, values: &[::num_complex::Complex64]) -> $crate::Result<()> {
                self.api.set_complex_array(concat!($class, "_Set_", stringify!($native)), values)
            }
        }
    };
}
