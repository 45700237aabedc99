//! Aggregated snapshot of instance metadata
//!
//! The eight attributes the dashboard reports are enumerated in a fixed
//! table pairing each metadata path with the value substituted when its
//! lookup fails. Aggregation never fails: failures are absorbed per field,
//! and a snapshot is always fully populated.

use futures::future;
use serde::{Deserialize, Serialize};

use super::client::MetadataClient;

/// Attribute paths served by the metadata server.
pub mod paths {
    pub const INSTANCE_NAME: &str = "/instance/name";
    pub const INSTANCE_ID: &str = "/instance/id";
    pub const ZONE: &str = "/instance/zone";
    pub const PROJECT_ID: &str = "/project/project-id";
    pub const MACHINE_TYPE: &str = "/instance/machine-type";
    pub const INTERNAL_IP: &str = "/instance/network-interfaces/0/ip";
    pub const EXTERNAL_IP: &str = "/instance/network-interfaces/0/access-configs/0/external-ip";
    pub const HOSTNAME: &str = "/instance/hostname";
}

/// Snapshot field targeted by a table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    InstanceName,
    InstanceId,
    Zone,
    ProjectId,
    MachineType,
    InternalIp,
    ExternalIp,
    Hostname,
}

/// One aggregation entry: which field, where to look, what to store on failure
struct FieldSpec {
    field: Field,
    path: &'static str,
    fallback: &'static str,
}

/// The eight lookups performed per snapshot, in render order.
///
/// External IP is the one attribute with a non-empty fallback; instances
/// without a public address (common for preemptible or NAT-only machines)
/// have no access-config entry to read.
static FIELDS: [FieldSpec; 8] = [
    FieldSpec {
        field: Field::InstanceName,
        path: paths::INSTANCE_NAME,
        fallback: "",
    },
    FieldSpec {
        field: Field::InstanceId,
        path: paths::INSTANCE_ID,
        fallback: "",
    },
    FieldSpec {
        field: Field::Zone,
        path: paths::ZONE,
        fallback: "",
    },
    FieldSpec {
        field: Field::ProjectId,
        path: paths::PROJECT_ID,
        fallback: "",
    },
    FieldSpec {
        field: Field::MachineType,
        path: paths::MACHINE_TYPE,
        fallback: "",
    },
    FieldSpec {
        field: Field::InternalIp,
        path: paths::INTERNAL_IP,
        fallback: "",
    },
    FieldSpec {
        field: Field::ExternalIp,
        path: paths::EXTERNAL_IP,
        fallback: "None",
    },
    FieldSpec {
        field: Field::Hostname,
        path: paths::HOSTNAME,
        fallback: "",
    },
];

/// Identity and network facts for the instance, one field per dashboard row
///
/// Always fully populated: a field whose lookup failed holds its configured
/// fallback rather than being absent. Built fresh for every request and
/// discarded once the response is rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmSnapshot {
    pub instance_name: String,
    pub instance_id: String,
    /// Full resource path as returned by the server, e.g.
    /// `projects/123/zones/us-central1-a`. The trailing zone name is not
    /// extracted.
    pub zone: String,
    pub project_id: String,
    pub machine_type: String,
    pub internal_ip: String,
    pub external_ip: String,
    pub hostname: String,
}

impl VmSnapshot {
    /// Fetch all eight attributes and assemble a snapshot.
    ///
    /// The lookups are independent and run concurrently; results merge only
    /// after all complete. A failed lookup leaves its field at the table's
    /// fallback value and does not disturb the others. Never fails.
    pub async fn gather(client: &MetadataClient) -> Self {
        let lookups = FIELDS
            .iter()
            .map(|entry| async move { client.fetch(entry.path).await.ok() });
        let values = future::join_all(lookups).await;

        let mut snapshot = VmSnapshot::default();
        for (entry, value) in FIELDS.iter().zip(values) {
            snapshot.set(entry.field, value.unwrap_or_else(|| entry.fallback.to_string()));
        }
        snapshot
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::InstanceName => self.instance_name = value,
            Field::InstanceId => self.instance_id = value,
            Field::Zone => self.zone = value,
            Field::ProjectId => self.project_id = value,
            Field::MachineType => self.machine_type = value,
            Field::InternalIp => self.internal_ip = value,
            Field::ExternalIp => self.external_ip = value,
            Field::Hostname => self.hostname = value,
        }
    }
}
