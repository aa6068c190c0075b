use std::fmt;
use std::str::FromStr;

use addthis_shared_models::Role;
use serde::Serialize;
use thiserror::Error;

use crate::error::GridError;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    FetchGrid,
    FetchRow,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::FetchGrid => "fetchGrid",
            Operation::FetchRow => "fetchRow",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown grid operation {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fetchGrid" => Ok(Operation::FetchGrid),
            "fetchRow" => Ok(Operation::FetchRow),
            other => Err(UnknownOperation(other.to_owned())),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleAssignment {
    pub operation: Operation,
    pub roles: &'static [Role],
}

const GRID_ROLES: &[Role] = &[Role::Manager, Role::SiteAdmin];

/// Who may call what, consumed by the host's authorization layer at dispatch.
pub const ROLE_ASSIGNMENTS: &[RoleAssignment] = &[
    RoleAssignment {
        operation: Operation::FetchGrid,
        roles: GRID_ROLES,
    },
    RoleAssignment {
        operation: Operation::FetchRow,
        roles: GRID_ROLES,
    },
];

pub fn permits(operation: Operation, held: &[Role]) -> bool {
    ROLE_ASSIGNMENTS
        .iter()
        .find(|assignment| assignment.operation == operation)
        .is_some_and(|assignment| held.iter().any(|role| assignment.roles.contains(role)))
}

/// Same lookup as [`permits`] for an operation named by the router.
pub fn permits_named(operation: &str, held: &[Role]) -> bool {
    operation
        .parse::<Operation>()
        .is_ok_and(|operation| permits(operation, held))
}

pub fn authorize(operation: Operation, held: &[Role]) -> Result<(), GridError> {
    if permits(operation, held) {
        Ok(())
    } else {
        Err(GridError::Forbidden { operation })
    }
}
