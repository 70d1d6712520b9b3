use crate::config::Settings;
use crate::error::{Result, StylernizerError};
use crate::model::SweepValue;
use crate::registrar::PlotFunction;
use crate::render::{Artifact, RenderState};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use tempfile::TempDir;

/// Shared, ordered record of what plot functions and artifacts did.
#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.0.borrow_mut().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

pub struct StubArtifact {
    label: String,
    log: EventLog,
    fail_save: bool,
}

impl StubArtifact {
    pub fn new(label: impl Into<String>, log: EventLog) -> Self {
        Self {
            label: label.into(),
            log,
            fail_save: false,
        }
    }

    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }
}

impl Artifact for StubArtifact {
    fn save(&self, path: &Path) -> Result<()> {
        if self.fail_save {
            return Err(StylernizerError::Artifact(format!(
                "cannot save {}",
                self.label
            )));
        }
        fs::write(path, &self.label)?;
        self.log.push(format!("save {}", self.label));
        Ok(())
    }

    fn show(&self) -> Result<()> {
        self.log.push(format!("show {}", self.label));
        Ok(())
    }

    fn dispose(&mut self) -> Result<()> {
        self.log.push(format!("dispose {}", self.label));
        Ok(())
    }
}

fn label(module: &str, function: &str, arg: Option<&SweepValue>) -> String {
    match arg {
        Some(arg) => format!("{}:{}({})", module, function, arg),
        None => format!("{}:{}", module, function),
    }
}

/// A plot function that logs `call <label>` and returns a [`StubArtifact`] on the same log.
pub fn recording_plot(module: &str, function: &str, log: &EventLog) -> PlotFunction {
    let log = log.clone();
    let (m, f) = (module.to_string(), function.to_string());
    PlotFunction::new(module, function, move |_state: &RenderState, arg: Option<&SweepValue>| {
        let label = label(&m, &f, arg);
        log.push(format!("call {}", label));
        Ok(Box::new(StubArtifact::new(label, log.clone())) as Box<dyn Artifact>)
    })
}

pub fn noop_plot(module: &str, function: &str) -> PlotFunction {
    recording_plot(module, function, &EventLog::default())
}

/// A plot function whose artifact refuses to be saved.
pub fn unsavable_plot(module: &str, function: &str, log: &EventLog) -> PlotFunction {
    let log = log.clone();
    let (m, f) = (module.to_string(), function.to_string());
    PlotFunction::new(module, function, move |_state: &RenderState, arg: Option<&SweepValue>| {
        let label = label(&m, &f, arg);
        log.push(format!("call {}", label));
        Ok(Box::new(StubArtifact::new(label, log.clone()).failing_save()) as Box<dyn Artifact>)
    })
}

/// A plot function that fails before producing anything.
pub fn failing_plot(module: &str, function: &str, log: &EventLog) -> PlotFunction {
    let log = log.clone();
    let (m, f) = (module.to_string(), function.to_string());
    PlotFunction::new(module, function, move |_state: &RenderState, arg: Option<&SweepValue>| {
        let label = label(&m, &f, arg);
        log.push(format!("call {}", label));
        Err(StylernizerError::Artifact(format!("{} exploded", label)))
    })
}

pub struct TestEnv {
    // Kept so the directory outlives the test
    pub _temp_dir: TempDir,
    pub settings: Settings,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let settings = Settings::new(root.join("output"), root.join("cache.json"), None);
        Self {
            _temp_dir: temp_dir,
            settings,
        }
    }
}
