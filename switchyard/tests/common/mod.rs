#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};
use switchyard::{
    AcceptError, BoxConnection, ConnectError, Connectable, Connection, DisposeError, Effect,
    EffectTag, Output, Variant, effect_variant,
};

// ============================================================================
// Test Effect Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Increment;

#[derive(Clone, Debug, PartialEq)]
pub struct Log {
    pub line: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Save {
    pub id: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dialog {
    pub title: String,
}

/// Never registered anywhere.
#[derive(Clone, Debug, PartialEq)]
pub struct Ghost;

#[derive(Clone, Debug, PartialEq)]
pub enum UiEffect {
    Toast(Toast),
    Dialog(Dialog),
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppEffect {
    Increment(Increment),
    Log(Log),
    Save(Save),
    Ui(UiEffect),
    Ghost(Ghost),
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    Saved(u32),
    Shown(String),
}

impl Effect for UiEffect {
    fn tag(&self) -> EffectTag {
        match self {
            UiEffect::Toast(_) => <Toast as Variant<UiEffect>>::TAG,
            UiEffect::Dialog(_) => <Dialog as Variant<UiEffect>>::TAG,
        }
    }
}

impl Effect for AppEffect {
    fn tag(&self) -> EffectTag {
        match self {
            AppEffect::Increment(_) => <Increment as Variant<AppEffect>>::TAG,
            AppEffect::Log(_) => <Log as Variant<AppEffect>>::TAG,
            AppEffect::Save(_) => <Save as Variant<AppEffect>>::TAG,
            AppEffect::Ui(ui) => ui.tag(),
            AppEffect::Ghost(_) => <Ghost as Variant<AppEffect>>::TAG,
        }
    }
}

effect_variant! {
    impl Variant<AppEffect> for Increment as ["increment"] {
        AppEffect::Increment(increment) => increment
    }
    impl Variant<AppEffect> for Log as ["log"] {
        AppEffect::Log(log) => log
    }
    impl Variant<AppEffect> for Save as ["save"] {
        AppEffect::Save(save) => save
    }
    impl Variant<AppEffect> for Ghost as ["ghost"] {
        AppEffect::Ghost(ghost) => ghost
    }
    impl Variant<AppEffect> for UiEffect as ["ui"] {
        AppEffect::Ui(ui) => ui
    }
    impl Variant<AppEffect> for Toast as ["ui", "toast"] {
        AppEffect::Ui(UiEffect::Toast(toast)) => toast
    }
    impl Variant<AppEffect> for Dialog as ["ui", "dialog"] {
        AppEffect::Ui(UiEffect::Dialog(dialog)) => dialog
    }
    impl Variant<UiEffect> for Toast as ["ui", "toast"] {
        UiEffect::Toast(toast) => toast
    }
    impl Variant<UiEffect> for Dialog as ["ui", "dialog"] {
        UiEffect::Dialog(dialog) => dialog
    }
}

pub fn log(line: &str) -> AppEffect {
    AppEffect::Log(Log {
        line: line.to_string(),
    })
}

pub fn save(id: u32) -> AppEffect {
    AppEffect::Save(Save { id })
}

pub fn toast(text: &str) -> AppEffect {
    AppEffect::Ui(UiEffect::Toast(Toast {
        text: text.to_string(),
    }))
}

pub fn dialog(title: &str) -> AppEffect {
    AppEffect::Ui(UiEffect::Dialog(Dialog {
        title: title.to_string(),
    }))
}

// ============================================================================
// Test Connectables
// ============================================================================

/// Hands its output to the test so events can be emitted at any time,
/// the way a handler running on its own thread would.
#[derive(Clone, Default)]
pub struct LeakyConnectable {
    pub leaked: Arc<Mutex<Option<Output<AppEvent>>>>,
}

impl LeakyConnectable {
    pub fn emit(&self, event: AppEvent) {
        let output = self.leaked.lock().unwrap().clone();
        output.expect("not connected yet").emit(event);
    }
}

impl Connectable<Save, AppEvent> for LeakyConnectable {
    fn connect(&self, output: Output<AppEvent>) -> Result<BoxConnection<Save>, ConnectError> {
        *self.leaked.lock().unwrap() = Some(output);
        let inner = switchyard::connectables::from_consumer(|_: &Save| {});
        Connectable::<Save, AppEvent>::connect(&inner, switchyard::sink(|_: AppEvent| {}))
    }
}

/// Panics the first time `connect` (or `dispose`) is called, then behaves.
#[derive(Clone, Default)]
pub struct PanickyConnectable {
    connect_panics: Arc<AtomicBool>,
    dispose_panics: Arc<AtomicBool>,
}

impl PanickyConnectable {
    pub fn on_connect() -> Self {
        let panicky = Self::default();
        panicky.connect_panics.store(true, Ordering::SeqCst);
        panicky
    }

    pub fn on_dispose() -> Self {
        let panicky = Self::default();
        panicky.dispose_panics.store(true, Ordering::SeqCst);
        panicky
    }
}

impl Connectable<Save, AppEvent> for PanickyConnectable {
    fn connect(&self, _output: Output<AppEvent>) -> Result<BoxConnection<Save>, ConnectError> {
        if self.connect_panics.swap(false, Ordering::SeqCst) {
            panic!("connect exploded");
        }
        Ok(Box::new(PanickyConnection {
            dispose_panics: self.dispose_panics.clone(),
        }))
    }
}

struct PanickyConnection {
    dispose_panics: Arc<AtomicBool>,
}

impl Connection<Save> for PanickyConnection {
    fn accept(&mut self, _value: &Save) -> Result<(), AcceptError> {
        Ok(())
    }

    fn dispose(&mut self) -> Result<(), DisposeError> {
        if self.dispose_panics.swap(false, Ordering::SeqCst) {
            panic!("dispose exploded");
        }
        Ok(())
    }
}
