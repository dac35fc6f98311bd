//! Live dump smoke tests.

use cfndump_aws::{CloudFormationCatalog, StsIdentity, active_regions};
use cfndump_core::{CallerIdentity, Dumper};

use crate::shared_config;

#[tokio::test]
#[ignore = "requires live AWS credentials"]
async fn test_should_resolve_caller_identity() {
    let config = shared_config().await;
    let identity = StsIdentity::new(aws_sdk_sts::Client::new(&config));

    let account = identity.account_id().await.unwrap();
    assert_eq!(account.as_str().len(), 12);
}

#[tokio::test]
#[ignore = "requires live AWS credentials"]
async fn test_should_enumerate_active_regions() {
    let config = shared_config().await;
    let ec2 = aws_sdk_ec2::Client::new(&config);

    let regions = active_regions(&ec2).await.unwrap();
    assert!(!regions.is_empty());
    assert!(regions.iter().any(|r| r.as_str() == "us-east-1"));
}

#[tokio::test]
#[ignore = "requires live AWS credentials"]
async fn test_should_dump_configured_region_into_temp_dir() {
    let config = shared_config().await;
    let dir = tempfile::tempdir().unwrap();

    let catalog = CloudFormationCatalog::new(aws_sdk_cloudformation::Client::new(&config));
    let identity = StsIdentity::new(aws_sdk_sts::Client::new(&config));
    let dumper = Dumper::new(catalog, identity, dir.path().to_str().unwrap());

    let written = dumper.dump().await.unwrap();

    // One file per stack, every name in the deterministic shape.
    let files: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), written);
    for name in &files {
        assert!(
            name.ends_with(".cfn.json") || name.ends_with(".cfn.yaml"),
            "unexpected file name: {name}"
        );
    }
}
