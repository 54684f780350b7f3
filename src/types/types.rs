use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
    str::FromStr,
};

use crate::errors::errors::ErrorImpl;

lazy_static! {
    /// Non-identity implicit conversions, as `(from, to)` pairs.
    pub static ref CONVERSION_TABLE: HashSet<(DataType, DataType)> = {
        let mut set = HashSet::new();
        set.insert((DataType::Char, DataType::Int));
        set.insert((DataType::Char, DataType::Float));
        set.insert((DataType::Int, DataType::Float));
        set
    };

    pub static ref TYPE_NAME_LOOKUP: HashMap<&'static str, DataType> = {
        let mut map = HashMap::new();
        for ty in DataType::ALL {
            map.insert(ty.display_name(), ty);
        }
        map
    };
}

/// A primitive type.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DataType {
    Void,
    Char,
    Int,
    Float,
    String,
}

impl DataType {
    pub const ALL: [DataType; 5] = [
        DataType::Void,
        DataType::Char,
        DataType::Int,
        DataType::Float,
        DataType::String,
    ];

    /// Name used in diagnostics and accepted by `from_str`.
    pub fn display_name(self) -> &'static str {
        match self {
            DataType::Void => "void",
            DataType::Char => "char",
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::String => "string",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for DataType {
    type Err = ErrorImpl;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        TYPE_NAME_LOOKUP
            .get(name)
            .copied()
            .ok_or_else(|| ErrorImpl::UnknownType {
                type_: name.to_string(),
            })
    }
}

/// Returns true if a value of type `from` may be assigned to a `to` slot
/// without an explicit cast.
pub fn can_convert(from: DataType, to: DataType) -> bool {
    from == to || CONVERSION_TABLE.contains(&(from, to))
}

/// Checks that every chain `a -> b -> c` in the conversion table also has a
/// direct `a -> c` entry.
pub fn is_transitively_closed() -> bool {
    CONVERSION_TABLE.iter().all(|&(from, via)| {
        CONVERSION_TABLE
            .iter()
            .filter(|(next, _)| *next == via)
            .all(|&(_, to)| can_convert(from, to))
    })
}
