//! # Serializer Registry
//!
//! Process-wide registry wiring codecs into the host replication pipeline.
//!
//! Registration is an explicit call made by the embedding application
//! during its startup sequence, matched by an explicit unregister during
//! shutdown - ordinary acquire/release discipline, exactly once each.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{ReplicationError, ReplicationResult};
use crate::protocol::GripSettingsCodec;

/// A codec the replication pipeline can look up by record type name.
pub trait ReplicatedSerializer: Send + Sync {
    /// Stable name of the record type this codec serializes.
    fn type_name(&self) -> &'static str;

    /// Wire format version. Two peers replicate a type only when their
    /// registered versions match.
    fn wire_version(&self) -> u32;
}

impl ReplicatedSerializer for GripSettingsCodec {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn wire_version(&self) -> u32 {
        Self::VERSION
    }
}

/// Registry of replicated serializers, keyed by record type name.
pub struct SerializerRegistry {
    entries: RwLock<HashMap<&'static str, Arc<dyn ReplicatedSerializer>>>,
}

impl SerializerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a serializer under its own type name.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::AlreadyRegistered`] if the name is
    /// taken; registration must happen exactly once per type.
    pub fn register(&self, serializer: Arc<dyn ReplicatedSerializer>) -> ReplicationResult<()> {
        let type_name = serializer.type_name();
        let mut entries = self.entries.write();

        if entries.contains_key(type_name) {
            return Err(ReplicationError::AlreadyRegistered { type_name });
        }

        tracing::info!("Serializer registered: {} (v{})", type_name, serializer.wire_version());
        entries.insert(type_name, serializer);
        Ok(())
    }

    /// Removes a previously registered serializer.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::NotRegistered`] if no serializer with
    /// that name was registered; unregister must match a register.
    pub fn unregister(&self, type_name: &str) -> ReplicationResult<()> {
        let mut entries = self.entries.write();

        if entries.remove(type_name).is_none() {
            return Err(ReplicationError::NotRegistered {
                type_name: type_name.to_string(),
            });
        }

        tracing::info!("Serializer unregistered: {}", type_name);
        Ok(())
    }

    /// Looks up a serializer by record type name.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<Arc<dyn ReplicatedSerializer>> {
        self.entries.read().get(type_name).cloned()
    }

    /// Returns true if a serializer is registered under `type_name`.
    #[must_use]
    pub fn is_registered(&self, type_name: &str) -> bool {
        self.entries.read().contains_key(type_name)
    }

    /// Number of registered serializers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
