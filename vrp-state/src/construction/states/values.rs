#[cfg(test)]
#[path = "../../../tests/unit/construction/states/values_test.rs"]
mod values_test;

use crate::models::common::MultiDimLoad;
use crate::models::problem::Skills;
use crate::utils::Float;

/// A type-tagged value kept in the state store.
#[derive(Clone, Debug, PartialEq)]
pub enum StateValue {
    /// A boolean flag.
    Bool(bool),
    /// An integer value.
    Int(i64),
    /// A floating point scalar.
    Float(Float),
    /// A multi dimensional size vector.
    Load(MultiDimLoad),
    /// A set of skills.
    Skills(Skills),
}

impl StateValue {
    /// Returns a name of the value type.
    pub fn type_name(&self) -> &'static str {
        match self {
            StateValue::Bool(_) => bool::TYPE_NAME,
            StateValue::Int(_) => i64::TYPE_NAME,
            StateValue::Float(_) => Float::TYPE_NAME,
            StateValue::Load(_) => MultiDimLoad::TYPE_NAME,
            StateValue::Skills(_) => Skills::TYPE_NAME,
        }
    }
}

/// Specifies a type which can be stored in the state store.
pub trait StateValueType: Sized + Into<StateValue> {
    /// A type name used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Returns a reference to the value if it has the same type.
    fn from_state(value: &StateValue) -> Option<&Self>;
}

macro_rules! state_value_type {
    ($type_: ty, $variant: ident, $name: expr) => {
        impl StateValueType for $type_ {
            const TYPE_NAME: &'static str = $name;

            fn from_state(value: &StateValue) -> Option<&Self> {
                match value {
                    StateValue::$variant(value) => Some(value),
                    _ => None,
                }
            }
        }

        impl From<$type_> for StateValue {
            fn from(value: $type_) -> Self {
                StateValue::$variant(value)
            }
        }
    };
}

state_value_type!(bool, Bool, "bool");
state_value_type!(i64, Int, "int");
state_value_type!(Float, Float, "float");
state_value_type!(MultiDimLoad, Load, "load");
state_value_type!(Skills, Skills, "skills");
