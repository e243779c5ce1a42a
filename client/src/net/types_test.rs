use super::*;

#[test]
fn session_deserializes_without_email() {
    let session: Session = serde_json::from_str(r#"{"user":{"id":"u-1","name":"admin"}}"#).unwrap();
    assert_eq!(session.user.id, "u-1");
    assert_eq!(session.user.email, None);
}

#[test]
fn cluster_reads_camel_case_fields() {
    let cluster: Cluster = serde_json::from_value(serde_json::json!({
        "id": "c-1",
        "name": "prod-seoul",
        "region": "ap-northeast-2",
        "nodeCount": 5,
        "createdAt": "2024-05-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(cluster.node_count, 5);
    assert_eq!(cluster.created_at.as_deref(), Some("2024-05-01T00:00:00Z"));
    assert_eq!(cluster.status, None);
}

#[test]
fn dns_entry_maps_type_field() {
    let entry: DnsEntry = serde_json::from_value(serde_json::json!({
        "id": "d-1",
        "hostname": "api.example.com",
        "type": "CNAME",
        "value": "lb.example.com"
    }))
    .unwrap();
    assert_eq!(entry.record_type, "CNAME");
    assert_eq!(entry.ttl, None);

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["type"], "CNAME");
}

#[test]
fn project_members_default_to_empty() {
    let project: Project = serde_json::from_str(r#"{"id":"p-1","name":"lake"}"#).unwrap();
    assert!(project.members.is_empty());
    assert_eq!(project.cluster_id, None);
}

#[test]
fn license_and_catalog_optional_fields() {
    let license: License =
        serde_json::from_str(r#"{"id":"l-1","customer":"acme","product":"console","expiresAt":"2027-01-01"}"#)
            .unwrap();
    assert_eq!(license.expires_at.as_deref(), Some("2027-01-01"));
    assert_eq!(license.seats, None);

    let catalog: Catalog = serde_json::from_str(r#"{"id":"cat-1","name":"sales","projectId":"p-1"}"#).unwrap();
    assert_eq!(catalog.project_id.as_deref(), Some("p-1"));
}
