use std::collections::HashMap;

use crate::eval::prelude::RuntimeErrorType;

use super::prelude::Value;

pub type Frame = HashMap<String, Value>;

/// Stack of name bindings. The global frame lives for the whole run and
/// every function call pushes one frame on top of it.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ScopeChain {
    globals: Frame,
    frames: Vec<Frame>,
    strict: bool,
}

impl ScopeChain {
    pub fn new(strict: bool) -> Self {
        Self {
            globals: HashMap::new(),
            frames: vec![],
            strict,
        }
    }

    /// Number of frames including the global one.
    pub fn depth(&self) -> usize {
        self.frames.len() + 1
    }

    fn innermost(&mut self) -> &mut Frame {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => &mut self.globals,
        }
    }

    fn innermost_ref(&self) -> &Frame {
        self.frames.last().unwrap_or(&self.globals)
    }

    /// Frames from innermost to global.
    fn search_order(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().rev().chain(std::iter::once(&self.globals))
    }

    pub fn lookup(&self, name: &str) -> Result<Value, RuntimeErrorType> {
        self.search_order()
            .find_map(|frame| frame.get(name))
            .cloned()
            .ok_or_else(|| RuntimeErrorType::UndefinedVariable { name: name.to_string() })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.search_order().any(|frame| frame.contains_key(name))
    }

    /// Binds `name` in the innermost frame. Under strict checking a name
    /// already bound in that same frame is rejected.
    pub fn declare(&mut self, name: String, value: Value) -> Result<(), RuntimeErrorType> {
        if self.strict && self.innermost_ref().contains_key(&name) {
            return Err(RuntimeErrorType::Redeclaration { name });
        }

        self.innermost().insert(name, value);

        Ok(())
    }

    /// Rebinds the nearest frame holding `name`, or creates the binding in
    /// the innermost frame when no frame has it.
    pub fn assign(&mut self, name: String, value: Value) {
        let holder = self.frames.iter_mut()
            .rev()
            .find(|frame| frame.contains_key(&name));

        match holder {
            Some(frame) => {
                frame.insert(name, value);
            },
            None if self.globals.contains_key(&name) => {
                self.globals.insert(name, value);
            },
            None => {
                self.innermost().insert(name, value);
            }
        }
    }

    pub fn define_global(&mut self, name: String, value: Value) {
        self.globals.insert(name, value);
    }

    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Drops the innermost call frame. The global frame is never popped.
    pub fn pop_frame(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn globals(&self) -> &Frame {
        &self.globals
    }
}
