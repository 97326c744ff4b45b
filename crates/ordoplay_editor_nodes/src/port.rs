// SPDX-License-Identifier: MIT OR Apache-2.0
//! Port definitions for node inputs/outputs.

use serde::{Deserialize, Serialize};

/// Index of a port on one side of a node
pub type PortIndex = u32;

/// Reserved index marking the unresolved side of a draft connection
pub const INVALID_PORT_INDEX: PortIndex = PortIndex::MAX;

/// Side of a node a port lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortType {
    /// Input port
    In,
    /// Output port
    Out,
    /// No port
    None,
}

impl PortType {
    /// The side a connection from this side attaches to
    pub fn opposite(self) -> PortType {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
            Self::None => Self::None,
        }
    }
}

/// Whether a port accepts more than one simultaneous connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionPolicy {
    /// At most one connection
    #[default]
    One,
    /// Any number of connections
    Many,
}

/// What pressing an already-connected port does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisconnectionPolicy {
    /// Start a new draft connection from the port
    Create,
    /// Detach an existing connection and drag it
    Move,
    /// Ignore the press
    None,
    /// Decide from the port side
    #[default]
    Unset,
}

impl DisconnectionPolicy {
    /// Resolve `Unset` by port side: inputs move, outputs create.
    ///
    /// Explicit policies are kept on either side.
    pub fn resolve(self, port_type: PortType) -> DisconnectionPolicy {
        match self {
            Self::Create | Self::Move | Self::None => self,
            Self::Unset if port_type == PortType::In => Self::Move,
            Self::Unset => Self::Create,
        }
    }
}

/// Data type that can flow through ports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataType {
    /// Execution flow
    Exec,
    /// Boolean value
    Bool,
    /// Integer value
    Int,
    /// Floating point value
    Float,
    /// 2D vector
    Vector2,
    /// 3D vector
    Vector3,
    /// 4D vector
    Vector4,
    /// Color (RGBA)
    Color,
    /// String value
    String,
    /// Any type (for generic nodes)
    Any,
    /// Custom type
    Custom(String),
}

impl DataType {
    /// Check if a value of this type can flow into a port of another type
    pub fn can_connect_to(&self, other: &DataType) -> bool {
        if matches!(self, Self::Any) || matches!(other, Self::Any) {
            return true;
        }

        if self == other {
            return true;
        }

        match (self, other) {
            (Self::Int, Self::Float) | (Self::Float, Self::Int) => true,
            (Self::Float, Self::Vector2 | Self::Vector3 | Self::Vector4) => true,
            (Self::Vector2, Self::Vector3 | Self::Vector4) => true,
            (Self::Vector3, Self::Vector4) => true,
            (Self::Color, Self::Vector4) | (Self::Vector4, Self::Color) => true,
            _ => false,
        }
    }
}

/// A port on a node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    /// Port name
    pub name: String,
    /// Data type
    pub data_type: DataType,
    /// How many connections the port holds
    pub connection_policy: ConnectionPolicy,
    /// What pressing the port does while it is connected
    pub disconnection_policy: DisconnectionPolicy,
}

impl Port {
    /// Create a new input port. Inputs hold a single connection by default.
    pub fn input(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            connection_policy: ConnectionPolicy::One,
            disconnection_policy: DisconnectionPolicy::Unset,
        }
    }

    /// Create a new output port. Outputs fan out by default.
    pub fn output(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            connection_policy: ConnectionPolicy::Many,
            disconnection_policy: DisconnectionPolicy::Unset,
        }
    }

    /// Override the connection policy
    pub fn with_connection_policy(mut self, policy: ConnectionPolicy) -> Self {
        self.connection_policy = policy;
        self
    }

    /// Override the disconnection policy
    pub fn with_disconnection_policy(mut self, policy: DisconnectionPolicy) -> Self {
        self.disconnection_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_unset_by_side() {
        assert_eq!(DisconnectionPolicy::Unset.resolve(PortType::In), DisconnectionPolicy::Move);
        assert_eq!(DisconnectionPolicy::Unset.resolve(PortType::Out), DisconnectionPolicy::Create);
    }

    #[test]
    fn test_resolve_keeps_explicit_policy() {
        for side in [PortType::In, PortType::Out] {
            for policy in [
                DisconnectionPolicy::Create,
                DisconnectionPolicy::Move,
                DisconnectionPolicy::None,
            ] {
                assert_eq!(policy.resolve(side), policy);
            }
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(PortType::In.opposite(), PortType::Out);
        assert_eq!(PortType::Out.opposite(), PortType::In);
        assert_eq!(PortType::None.opposite(), PortType::None);
    }

    #[test]
    fn test_data_type_compatibility() {
        assert!(DataType::Float.can_connect_to(&DataType::Vector3));
        assert!(!DataType::Vector3.can_connect_to(&DataType::Float));
        assert!(DataType::Any.can_connect_to(&DataType::Exec));
        assert!(!DataType::Bool.can_connect_to(&DataType::String));
        assert!(DataType::Custom("mesh".into()).can_connect_to(&DataType::Custom("mesh".into())));
    }

    #[test]
    fn test_port_defaults() {
        let input = Port::input("In", DataType::Float);
        let output = Port::output("Out", DataType::Float);
        assert_eq!(input.connection_policy, ConnectionPolicy::One);
        assert_eq!(output.connection_policy, ConnectionPolicy::Many);
        assert_eq!(input.disconnection_policy, DisconnectionPolicy::Unset);
    }
}
