//! Named variables.

use crate::container::{Container, Placement};
use crate::error::Result;
use crate::value::Value;

/// A named slot holding one value.
///
/// Variables only support whole-content writes, so every chunk mutation
/// routed through one goes through the read-splice-write fallback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variable {
	name: String,
	value: Value,
}

impl Variable {
	pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn value(&self) -> &Value {
		&self.value
	}
}

/// Joins `incoming` onto `current` within the current value's domain. An
/// empty current value adopts the incoming value as-is.
fn concat(current: Value, incoming: Value, placement: Placement) -> Value {
	let front = placement == Placement::Before;
	match current {
		Value::Empty => incoming,
		Value::List(mut items) => {
			let mut extra = incoming.to_list();
			if front {
				extra.append(&mut items);
				Value::List(extra)
			} else {
				items.append(&mut extra);
				Value::List(items)
			}
		}
		Value::Binary(mut bytes) => match incoming.to_binary() {
			Ok(mut extra) if front => {
				extra.append(&mut bytes);
				Value::Binary(extra)
			}
			Ok(mut extra) => {
				bytes.append(&mut extra);
				Value::Binary(bytes)
			}
			Err(_) => concat_text(Value::Binary(bytes), incoming, front),
		},
		other => concat_text(other, incoming, front),
	}
}

fn concat_text(current: Value, incoming: Value, front: bool) -> Value {
	if front {
		Value::String(format!("{incoming}{current}"))
	} else {
		Value::String(format!("{current}{incoming}"))
	}
}

impl Container for Variable {
	fn describe(&self) -> String {
		self.name.clone()
	}

	fn can_get_contents(&self) -> bool {
		true
	}

	fn get_contents(&self) -> Result<Value> {
		Ok(self.value.clone())
	}

	fn can_put_contents(&self) -> bool {
		true
	}

	fn put_contents(&mut self, placement: Placement, value: Value) -> Result<()> {
		self.value = match placement {
			Placement::Into => value,
			_ => concat(std::mem::take(&mut self.value), value, placement),
		};
		Ok(())
	}

	fn can_delete(&self) -> bool {
		true
	}

	fn delete(&mut self) -> Result<()> {
		self.value = Value::Empty;
		Ok(())
	}
}
