//! Tests for the manifest.

use super::{
    Classification, LaunchMode, Manifest, Namespace, PermissionChecklist, PermissionTable,
    PermissionTier,
};
use std::str::FromStr;

#[test]
fn it_launch_mode_from_str() {
    assert_eq!(LaunchMode::Standard, LaunchMode::from_str("standard").unwrap());
    assert_eq!(LaunchMode::SingleTop, LaunchMode::from_str("1").unwrap());
    assert_eq!(
        LaunchMode::SingleInstance,
        LaunchMode::from_str("singleInstance").unwrap()
    );
    assert!(LaunchMode::from_str("singleEverything").is_err());
}

#[test]
fn it_classifies_standard_permissions() {
    let table = PermissionTable::default();

    match table.classify("android.permission.INTERNET") {
        Classification::Known(entry) => {
            assert_eq!(entry.name(), "INTERNET");
            assert_eq!(entry.tier(), PermissionTier::Dangerous);
            assert_eq!(entry.label(), "full Internet access");
            assert_eq!(entry.namespace(), Namespace::Standard);
        }
        other => panic!("unexpected classification: {:?}", other),
    }
}

#[test]
fn it_classifies_vendor_permissions() {
    let table = PermissionTable::default();

    match table.classify("com.oculus.permission.HAND_TRACKING") {
        Classification::Known(entry) => {
            assert_eq!(entry.tier(), PermissionTier::Dangerous);
            assert_eq!(entry.namespace(), Namespace::Vendor);
        }
        other => panic!("unexpected classification: {:?}", other),
    }
    assert_eq!(
        table.classify("com.example.permission.C2D_MESSAGE"),
        Classification::Unknown("com.example.permission.C2D_MESSAGE")
    );
}

#[test]
fn it_accumulates_unknown_permissions() {
    let table = PermissionTable::default();
    let checklist = PermissionChecklist::classify(
        &table,
        &[
            "android.permission.INTERNET",
            "android.permission.FOO_BAR",
            "android.permission.BAZ_QUX",
            "android.permission.FOO_BAR",
            "com.oculus.permission.HAND_TRACKING",
            "android.permission.ACCESS_NETWORK_STATE",
        ],
    );

    assert_eq!(
        checklist.tier(PermissionTier::Other),
        &[
            "android.permission.FOO_BAR".to_owned(),
            "android.permission.BAZ_QUX".to_owned()
        ]
    );
    assert_eq!(
        checklist.tier(PermissionTier::Dangerous),
        &["INTERNET".to_owned(), "HAND_TRACKING".to_owned()]
    );
    assert_eq!(
        checklist.tier(PermissionTier::Normal),
        &["ACCESS_NETWORK_STATE".to_owned()]
    );
    assert!(checklist.declares_dangerous("HAND_TRACKING"));
    assert!(!checklist.declares_dangerous("EYE_TRACKING"));
    assert_eq!(checklist.len(), 5);
}

#[test]
fn it_loads_manifest_export() {
    let manifest: Manifest = serde_json::from_str(
        r#"{
            "package": "com.example.vr",
            "app_name": "Example VR",
            "version_code": 12,
            "version_name": "1.2",
            "min_sdk": 23,
            "permissions": ["android.permission.INTERNET"],
            "allow_backup": true,
            "activities": [
                { "name": ".MainActivity", "launch_mode": "2" },
                { "name": "com.unity3d.player.UnityPlayerActivity" }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(manifest.target_sdk(), 23);
    assert!(manifest.allows_backup());
    assert!(!manifest.is_debug());

    let modes = manifest.activities_launch_mode();
    assert_eq!(
        modes.get("com.example.vr.MainActivity"),
        Some(&LaunchMode::SingleTask)
    );
    assert_eq!(
        modes.get("com.unity3d.player.UnityPlayerActivity"),
        Some(&LaunchMode::Standard)
    );
}

#[test]
fn it_has_a_complete_table() {
    let table = PermissionTable::default();
    assert!(table.len() > 200);
    assert_eq!(
        table.lookup("SEND_SMS").map(|e| e.tier()),
        Some(PermissionTier::Dangerous)
    );
    assert_eq!(
        table.lookup("BIND_DEVICE_ADMIN").map(|e| e.tier()),
        Some(PermissionTier::Signature)
    );
}
