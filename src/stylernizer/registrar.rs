//! # Registrar
//!
//! Turns plain plot functions into registry entries.
//!
//! A [`PlotFunction`] is a function plus the two identifiers that name it: the
//! dotted module path it lives in and its own name. [`register`] wraps it in a
//! [`StyledPlot`] that applies the style set and orientation to the shared
//! [`RenderState`] before delegating, then inserts one [`Producer`] per key:
//!
//! - no sweep: one entry under `module:name`
//! - sweep `a0..an`: one entry per value under `module:name_<suffix>`, each
//!   bound to its value
//!
//! The function handed in comes back untouched, so callers can keep using it
//! directly. Everything else is a side effect on the [`Registry`].
//!
//! ```rust
//! use stylernizer::model::{Orientation, SweepValue};
//! use stylernizer::registrar::{PlotFunction, PlotOptions};
//! use stylernizer::registry::Registry;
//! use stylernizer::render::{Artifact, RenderState};
//! use stylernizer::figure::Figure;
//! use stylernizer::error::Result;
//!
//! fn decay(state: &RenderState, rate: Option<&SweepValue>) -> Result<Box<dyn Artifact>> {
//!     let rate = rate.and_then(SweepValue::as_f64).unwrap_or(1.0);
//!     let mut fig = Figure::new(state, "decay");
//!     fig.line("decay", (0..50).map(|i| (i as f64, (-rate * i as f64 / 10.0).exp())));
//!     Ok(Box::new(fig))
//! }
//!
//! let mut registry = Registry::new();
//! registry
//!     .register(
//!         PlotOptions::new().sweep([0.5, 1.0]).orientation(Orientation::Landscape),
//!         PlotFunction::new("physics.decay", "decay", decay),
//!     )
//!     .unwrap();
//! assert_eq!(
//!     registry.keys(),
//!     vec!["physics.decay:decay_0.5", "physics.decay:decay_1.0"]
//! );
//! ```

use crate::error::{Result, StylernizerError};
use crate::model::{qualified_name, Orientation, SweepValue};
use crate::registry::Registry;
use crate::render::{Artifact, RenderState};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Signature every plot function implements.
pub type PlotFn = dyn Fn(&RenderState, Option<&SweepValue>) -> Result<Box<dyn Artifact>>;

/// A plot function together with its module path and name.
#[derive(Clone)]
pub struct PlotFunction {
    module: Option<String>,
    name: String,
    func: Rc<PlotFn>,
}

impl PlotFunction {
    /// `module` prefixes the registry keys. Use the catalog id of the module
    /// that registers the function (what [`plot_fn!`](crate::plot_fn) passes)
    /// so keys and the cached module list agree.
    pub fn new<F>(module: impl Into<String>, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&RenderState, Option<&SweepValue>) -> Result<Box<dyn Artifact>> + 'static,
    {
        Self {
            module: Some(module.into()),
            name: name.into(),
            func: Rc::new(func),
        }
    }

    /// A function that does not belong to any module. It cannot be registered.
    pub fn detached<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&RenderState, Option<&SweepValue>) -> Result<Box<dyn Artifact>> + 'static,
    {
        Self {
            module: None,
            name: name.into(),
            func: Rc::new(func),
        }
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, state: &RenderState, arg: Option<&SweepValue>) -> Result<Box<dyn Artifact>> {
        (self.func)(state, arg)
    }

    /// True when both handles point at the same underlying function.
    pub fn same_function(&self, other: &PlotFunction) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for PlotFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotFunction")
            .field("module", &self.module)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Wraps a function item into a [`PlotFunction`] named after the calling module.
///
/// ```rust,ignore
/// fn sine(state: &RenderState, _: Option<&SweepValue>) -> Result<Box<dyn Artifact>> { .. }
/// registry.register(PlotOptions::new(), plot_fn!(sine))?;
/// ```
#[macro_export]
macro_rules! plot_fn {
    ($func:ident) => {
        $crate::registrar::PlotFunction::new(
            $crate::model::module_id(module_path!()),
            stringify!($func),
            $func,
        )
    };
}

/// Registration options: extra styles, an optional sweep and an orientation.
#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    styles: Vec<String>,
    sweep: Option<Vec<SweepValue>>,
    orientation: Option<Orientation>,
}

impl PlotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.styles.push(style.into());
        self
    }

    pub fn styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles.extend(styles.into_iter().map(Into::into));
        self
    }

    /// Expands the registration into one entry per value.
    pub fn sweep<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SweepValue>,
    {
        self.sweep = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// A sweep over a single value.
    pub fn sweep_value(mut self, value: impl Into<SweepValue>) -> Self {
        self.sweep = Some(vec![value.into()]);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

/// Applies a style set and orientation to the render state, then runs the target.
pub struct StyledPlot {
    target: PlotFunction,
    styles: Vec<String>,
    orientation: Option<Orientation>,
}

impl StyledPlot {
    pub fn new(target: PlotFunction, styles: Vec<String>, orientation: Option<Orientation>) -> Self {
        Self {
            target,
            styles,
            orientation,
        }
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn call(&self, state: &mut RenderState, arg: Option<&SweepValue>) -> Result<Box<dyn Artifact>> {
        state.use_styles(&self.styles);
        if let Some(orientation) = self.orientation {
            state.set_orientation(orientation);
        }
        self.target.call(state, arg)
    }
}

/// Zero-argument entry point stored in the registry: a shared wrapper plus the
/// sweep value bound to this entry, if any.
#[derive(Clone)]
pub struct Producer {
    wrapper: Rc<StyledPlot>,
    bound: Option<SweepValue>,
}

impl Producer {
    pub fn new(wrapper: Rc<StyledPlot>, bound: Option<SweepValue>) -> Self {
        Self { wrapper, bound }
    }

    pub fn bound(&self) -> Option<&SweepValue> {
        self.bound.as_ref()
    }

    pub fn wrapper(&self) -> &StyledPlot {
        &self.wrapper
    }

    pub fn invoke(&self, state: &mut RenderState) -> Result<Box<dyn Artifact>> {
        self.wrapper.call(state, self.bound.as_ref())
    }
}

/// Registers `f` in `registry` and returns it unchanged.
///
/// The style set is the registry's base style (if any) followed by the
/// option styles. An empty sweep behaves like no sweep.
pub fn register(registry: &mut Registry, options: PlotOptions, f: PlotFunction) -> Result<PlotFunction> {
    let module = match f.module() {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => {
            return Err(StylernizerError::InvalidTarget(format!(
                "function {} does not have a module name",
                f.name()
            )))
        }
    };

    let mut styles: Vec<String> = registry.base_style().map(str::to_string).into_iter().collect();
    styles.extend(options.styles);

    registry.remember_module(&module);
    let base = qualified_name(&module, f.name());
    let wrapper = Rc::new(StyledPlot::new(f.clone(), styles, options.orientation));

    match options.sweep.filter(|values| !values.is_empty()) {
        None => {
            debug!("registering {}", base);
            registry.remember_plot(&base);
            registry.put(base, Producer::new(wrapper, None));
        }
        Some(values) => {
            for value in values {
                let name = format!("{}_{}", base, value.suffix());
                debug!("registering {}", name);
                registry.remember_plot(&name);
                registry.put(name, Producer::new(Rc::clone(&wrapper), Some(value)));
            }
        }
    }

    Ok(f)
}
