//! Versioned storage layout.
//!
//! Each logic version declares the exact field list it reads and writes. An
//! instance records the layout it was bound with and refuses to be retargeted
//! to a logic whose layout differs in order, name or kind.

use soroban_sdk::{contracttype, symbol_short, vec, Env, Symbol, Vec};

use crate::Error;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Account,
    Int128,
    UInt64,
    AccountSet,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldLayout {
    pub name: Symbol,
    pub kind: FieldKind,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StorageSchema {
    pub version: u32,
    pub fields: Vec<FieldLayout>,
}

impl StorageSchema {
    /// Layouts are compatible when the field lists match exactly; the
    /// version number is informational.
    pub fn is_compatible_with(&self, other: &StorageSchema) -> bool {
        self.fields == other.fields
    }

    pub fn check_compatible(&self, other: &StorageSchema) -> Result<(), Error> {
        if self.is_compatible_with(other) {
            Ok(())
        } else {
            Err(Error::IncompatibleSchema)
        }
    }
}

pub fn field(name: Symbol, kind: FieldKind) -> FieldLayout {
    FieldLayout { name, kind }
}

/// Layout of [`crate::LotteryState`], shared by every published ticket logic.
pub fn lottery_schema(env: &Env) -> StorageSchema {
    StorageSchema {
        version: 1,
        fields: vec![
            env,
            field(symbol_short!("owner"), FieldKind::Account),
            field(Symbol::new(env, "ticket_price"), FieldKind::Int128),
            field(Symbol::new(env, "sale_deadline"), FieldKind::UInt64),
            field(symbol_short!("players"), FieldKind::AccountSet),
            field(symbol_short!("pool"), FieldKind::Int128),
        ],
    }
}
