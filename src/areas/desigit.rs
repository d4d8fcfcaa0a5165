use crate::areas::launcher::Launcher;
use std::cell::{RefCell, RefMut};

/// Application context shared by every command: where to write user-facing
/// output and which executable to delegate to.
pub struct Desigit {
    writer: RefCell<Box<dyn std::io::Write>>,
    launcher: Launcher,
}

impl Desigit {
    pub fn new(launcher: Launcher, writer: Box<dyn std::io::Write>) -> Self {
        Desigit {
            writer: RefCell::new(writer),
            launcher,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }
}
