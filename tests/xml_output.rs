mod common;
use crate::common::{EpisodeBuilder, FeedConfigBuilder, init_tracing, write_feed};

use std::fs;

use podfeed::convert;
use podfeed::rss::{build_document, to_xml, write_document};
use tempfile::tempdir;

const EXPECTED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <link>https://ex.com/</link>
    <format>audio/mpeg</format>
    <title>Test Podcast</title>
    <subtitle>A podcast used in tests</subtitle>
    <itunes:author>Test Author</itunes:author>
    <description>Episodes for testing</description>
    <itunes:image href="https://ex.com/cover.jpg"/>
    <language>en-us</language>
    <link>https://ex.com/</link>
    <itunes:category text="Technology"/>
    <item>
      <title>Episode 1</title>
      <itunes:author>Test Author</itunes:author>
      <description>About Episode 1</description>
      <itunes:duration>00:10:00</itunes:duration>
      <pubDate>Thu, 12 Jan 2023 18:00:00 GMT</pubDate>
      <enclosure url="https://ex.com/ep1.mp3" type="audio/mpeg" length="1000"/>
    </item>
  </channel>
</rss>
"#;

#[test]
fn renders_declaration_and_two_space_indent() {
    let cfg = FeedConfigBuilder::new().with_numbered_episodes(1).build();
    let xml = to_xml(&build_document(&cfg)).unwrap();

    assert_eq!(String::from_utf8(xml).unwrap(), EXPECTED);
}

#[test]
fn text_and_attributes_are_escaped() {
    let cfg = FeedConfigBuilder::new()
        .set("title", "Tom & Jerry <live>")
        .set("link", "https://ex.com/?a=1&b=2/")
        .with_episode(EpisodeBuilder::new("Q&A", "qa.mp3", 7))
        .build();
    let xml = String::from_utf8(to_xml(&build_document(&cfg)).unwrap()).unwrap();

    assert!(xml.contains("<title>Tom &amp; Jerry &lt;live&gt;</title>"));
    assert!(xml.contains("<title>Q&amp;A</title>"));
    assert!(xml.contains(r#"url="https://ex.com/?a=1&amp;b=2/qa.mp3""#));
    assert!(!xml.contains("Tom & Jerry"));
}

#[test]
fn non_ascii_text_is_written_as_utf8() {
    let cfg = FeedConfigBuilder::new()
        .set("title", "Café Ünïcode ☕")
        .with_numbered_episodes(1)
        .build();
    let xml = String::from_utf8(to_xml(&build_document(&cfg)).unwrap()).unwrap();

    assert!(xml.contains("<title>Café Ünïcode ☕</title>"));
}

#[test]
fn write_document_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("podcast.xml");
    fs::write(&output, "stale content that is longer than nothing").unwrap();

    let cfg = FeedConfigBuilder::new().with_numbered_episodes(1).build();
    write_document(&build_document(&cfg), &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), EXPECTED);
}

#[test]
fn convert_writes_one_item_per_episode() {
    init_tracing();
    let dir = tempdir().unwrap();
    let yaml = FeedConfigBuilder::new().with_numbered_episodes(4).to_yaml();
    let input = write_feed(dir.path(), &yaml);
    let output = dir.path().join("podcast.xml");

    let summary = convert(&input, &output).unwrap();
    assert_eq!(summary.episodes, 4);

    let xml = fs::read_to_string(&output).unwrap();
    assert_eq!(xml.matches("<item>").count(), 4);
    let positions: Vec<usize> = (1..=4)
        .map(|i| xml.find(&format!("ep{i}.mp3")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn numeric_length_from_yaml_becomes_attribute_text() {
    let dir = tempdir().unwrap();
    let yaml = FeedConfigBuilder::new()
        .with_episode(EpisodeBuilder::new("One", "ep1.mp3", 12345))
        .to_yaml();
    assert!(yaml.contains("length: 12345"));
    let input = write_feed(dir.path(), &yaml);
    let output = dir.path().join("podcast.xml");

    convert(&input, &output).unwrap();

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains(
        r#"<enclosure url="https://ex.com/ep1.mp3" type="audio/mpeg" length="12345"/>"#
    ));
}

#[test]
fn running_twice_is_byte_identical() {
    let dir = tempdir().unwrap();
    let yaml = FeedConfigBuilder::new().with_numbered_episodes(3).to_yaml();
    let input = write_feed(dir.path(), &yaml);
    let output = dir.path().join("podcast.xml");

    convert(&input, &output).unwrap();
    let first = fs::read(&output).unwrap();
    convert(&input, &output).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}
