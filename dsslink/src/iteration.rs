//! Walking the elements of a class through the engine's active cursor.
//!
//! `<Class>_Get_First` / `<Class>_Get_Next` activate an element and return
//! its 1-based index, or 0 once the class is exhausted. The cursor lives in
//! the engine, so a [`Cursor`] keeps nothing but whether it has started.

use crate::api::Api;
use crate::error::Result;

fn symbol(class: &str, op: &str) -> String {
    format!("{}_{}", class, op)
}

/// Shared operations of every collection interface.
pub trait Iterable {
    /// Native class prefix, e.g. `"Loads"`.
    const CLASS: &'static str;

    fn api(&self) -> &Api;

    /// Activate the first element. Returns 0 when the class is empty.
    fn first(&self) -> Result<i32> {
        self.api().get_i32(&symbol(Self::CLASS, "Get_First"))
    }

    /// Activate the next element. Returns 0 past the last one.
    fn next(&self) -> Result<i32> {
        self.api().get_i32(&symbol(Self::CLASS, "Get_Next"))
    }

    fn count(&self) -> Result<i32> {
        self.api().get_i32(&symbol(Self::CLASS, "Get_Count"))
    }

    fn len(&self) -> Result<usize> {
        Ok(self.count()?.max(0) as usize)
    }

    fn all_names(&self) -> Result<Vec<String>> {
        self.api().get_string_array(&symbol(Self::CLASS, "Get_AllNames"))
    }

    /// Name of the active element.
    fn name(&self) -> Result<String> {
        self.api().get_string(&symbol(Self::CLASS, "Get_Name"))
    }

    /// Activate an element by name.
    fn set_name(&self, name: &str) -> Result<()> {
        self.api().set_string(&symbol(Self::CLASS, "Set_Name"), name)
    }

    /// Iterate over the class, activating each element in turn.
    fn iter(&self) -> Cursor<'_, Self> {
        Cursor {
            target: self,
            started: false,
            finished: false,
        }
    }

    /// Run `f` with each element active and collect the results.
    ///
    /// ```no_run
    /// # use dsslink::prelude::*;
    /// # fn demo(dss: &Dss) -> dsslink::Result<()> {
    /// let circuit = dss.active_circuit();
    /// let loads = circuit.loads();
    /// let kw: Vec<f64> = loads.map_each(|l| l.kw())?;
    /// # Ok(())
    /// # }
    /// ```
    fn map_each<T, F>(&self, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(&Self) -> Result<T>,
    {
        let mut out = Vec::new();
        for step in self.iter() {
            step?;
            out.push(f(self)?);
        }
        Ok(out)
    }
}

/// Selection by 1-based index, for classes exporting `<Class>_Get_idx` and
/// `<Class>_Set_idx`. Mixed collections such as `PDElements` do not.
pub trait Indexed: Iterable {
    /// 1-based index of the active element.
    fn idx(&self) -> Result<i32> {
        self.api().get_i32(&symbol(Self::CLASS, "Get_idx"))
    }

    /// Activate an element by its 1-based index.
    fn set_idx(&self, idx: i32) -> Result<()> {
        self.api().set_i32(&symbol(Self::CLASS, "Set_idx"), idx)
    }
}

/// Iterator over a class; yields the engine's 1-based element index.
///
/// An engine error is yielded once and ends the iteration.
pub struct Cursor<'a, I: Iterable + ?Sized> {
    target: &'a I,
    started: bool,
    finished: bool,
}

impl<I: Iterable + ?Sized> Iterator for Cursor<'_, I> {
    type Item = Result<i32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let step = if self.started {
            Iterable::next(self.target)
        } else {
            self.started = true;
            self.target.first()
        };
        match step {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(index) => Some(Ok(index)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<I: Iterable + ?Sized> std::iter::FusedIterator for Cursor<'_, I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::scripted;

    struct Widgets<'a> {
        api: &'a Api,
    }

    impl Iterable for Widgets<'_> {
        const CLASS: &'static str = "Widgets";

        fn api(&self) -> &Api {
            self.api
        }
    }

    #[test]
    fn test_empty_class_yields_nothing() {
        let (api, backend) = scripted();
        let widgets = Widgets { api: &api };
        assert_eq!(widgets.iter().count(), 0);
        assert_eq!(backend.calls.lock().unwrap().as_slice(), ["Widgets_Get_First"]);
    }

    #[test]
    fn test_error_ends_iteration() {
        let (api, backend) = scripted();
        backend.i32s.lock().unwrap().insert("Widgets_Get_First".into(), 1);
        backend.fail_next(7, "cursor broke");
        let widgets = Widgets { api: &api };
        let steps: Vec<_> = widgets.iter().collect();
        assert_eq!(steps.len(), 1);
        assert!(steps[0].is_err());
    }

    struct Gizmos<'a> {
        api: &'a Api,
    }

    impl Iterable for Gizmos<'_> {
        const CLASS: &'static str = "Gizmos";

        fn api(&self) -> &Api {
            self.api
        }
    }

    impl Indexed for Gizmos<'_> {}

    #[test]
    fn test_indexed_selection_uses_idx_symbols() {
        let (api, backend) = scripted();
        let gizmos = Gizmos { api: &api };
        gizmos.set_idx(2).unwrap();
        assert_eq!(gizmos.idx().unwrap(), 2);
        assert_eq!(
            backend.calls.lock().unwrap().as_slice(),
            ["Gizmos_Set_idx", "Gizmos_Get_idx"]
        );
    }

    #[test]
    fn test_len_clamps_negative_count() {
        let (api, backend) = scripted();
        backend.i32s.lock().unwrap().insert("Widgets_Get_Count".into(), -1);
        let widgets = Widgets { api: &api };
        assert_eq!(widgets.len().unwrap(), 0);
    }
}
