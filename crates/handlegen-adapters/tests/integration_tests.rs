//! Integration tests wiring the adapters into the core services.

use std::time::Instant;

use chrono::Utc;
use handlegen_adapters::{LocalFilesystem, MemoryClipboard, MemoryFilesystem, SeededCoin};
use handlegen_core::{
    application::{ApplicationError, SessionDefaults},
    domain::site::SiteConfig,
    prelude::*,
};

#[test]
fn publish_to_disk_writes_all_documents() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("public");
    let site = SiteConfig::with_url("https://handles.example").unwrap();
    let service = SiteService::new(site, Box::new(LocalFilesystem::new()));

    let written = service.publish(&out, Utc::now(), false).unwrap();
    assert_eq!(written.len(), 3);

    let robots = std::fs::read_to_string(out.join("robots.txt")).unwrap();
    assert!(robots.starts_with("User-Agent: Googlebot"));
    assert!(robots.contains("Host: https://handles.example"));

    let sitemap = std::fs::read_to_string(out.join("sitemap.xml")).unwrap();
    assert!(sitemap.contains("<loc>https://handles.example/</loc>"));

    let schema = std::fs::read_to_string(out.join("schema.jsonld")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&schema).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(2));
}

#[test]
fn publish_twice_requires_force() {
    let dir = tempfile::tempdir().unwrap();
    let service = SiteService::new(SiteConfig::default(), Box::new(LocalFilesystem::new()));

    service.publish(dir.path(), Utc::now(), false).unwrap();
    let err = service.publish(dir.path(), Utc::now(), false).unwrap_err();
    assert!(matches!(
        err,
        HandlegenError::Application(ApplicationError::OutputExists { .. })
    ));

    service.publish(dir.path(), Utc::now(), true).unwrap();
}

#[test]
fn publish_to_memory_filesystem() {
    let fs = MemoryFilesystem::new();
    let service = SiteService::new(SiteConfig::default(), Box::new(fs.clone()));
    service.publish("site", Utc::now(), false).unwrap();
    assert_eq!(fs.list_files().len(), 3);
    assert!(
        fs.read_file(std::path::Path::new("site/robots.txt"))
            .unwrap()
            .contains("Crawl-delay: 1")
    );
}

#[test]
fn seeded_service_is_reproducible() {
    let options = GeneratorOptions::new().keyword("orbit").style("retro").count(12);
    let first = GeneratorService::new(Box::new(SeededCoin::new(5))).generate(&options);
    let second = GeneratorService::new(Box::new(SeededCoin::new(5))).generate(&options);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn session_copies_through_memory_clipboard() {
    let clipboard = MemoryClipboard::new();
    let mut session = UsernameSession::new(
        GeneratorService::new(Box::new(SeededCoin::new(1))),
        SessionDefaults::default(),
    );
    let pick = session.results()[0].clone();
    let now = Instant::now();

    assert!(session.copy(&pick, &clipboard, now));
    assert_eq!(clipboard.contents(), Some(pick.clone()));
    assert_eq!(session.label_for(&pick, now), "Copied");

    assert!(!session.copy(&pick, &MemoryClipboard::failing(), now));
    assert_eq!(session.copied_at(now), None);
}
