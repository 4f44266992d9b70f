use chrono::{TimeZone, Utc};
use url::Url;

use super::{Archivable, ArchiveReader, Decoder, Encoder, KeyedArchive, jj_decoder, jj_encoder};
use crate::nav::{JjError, Raw, Result};

#[derive(Debug, PartialEq)]
struct Author {
	name: String,
	headquarters: String,
}

impl Archivable for Author {
	const TYPE_NAME: &'static str = "Author";

	fn encode(&self, enc: &mut Encoder<'_>) {
		enc.put(self.name.as_str(), "name");
		enc.put(self.headquarters.as_str(), "headquarters");
	}

	fn decode(dec: &Decoder<'_>) -> Result<Self> {
		Ok(Self {
			name: dec.at("name").string()?.to_owned(),
			headquarters: dec.at("headquarters").string()?.to_owned(),
		})
	}
}

#[test]
fn strings_round_trip_through_archive() {
	let mut archive = KeyedArchive::new();
	let mut enc = jj_encoder(&mut archive);
	enc.put("Yury", "name");
	enc.put("AnjLab", "headquarters");

	let dec = jj_decoder(&archive);
	assert_eq!(dec.at("name").string().expect("name stored"), "Yury");
	assert_eq!(dec.at("headquarters").as_string(), Some("AnjLab"));
	assert_eq!(dec.at("missing").to_string(|| "n/a".to_owned()), "n/a");
}

#[test]
fn scalars_default_lazily_while_archive_decoders_use_zero_values() {
	let mut archive = KeyedArchive::new();
	let mut enc = jj_encoder(&mut archive);
	enc.put_int(42, "count");
	enc.put_bool(true, "flag");
	enc.put_float(1.5, "ratio");
	enc.put_double(2.25, "scale");

	let dec = jj_decoder(&archive);
	assert_eq!(dec.at("count").int().expect("int stored"), 42);
	assert_eq!(dec.at("count").to_int(|| panic!("default must not be evaluated")), 42);
	assert!(dec.at("flag").bool().expect("bool stored"));
	assert!(dec.at("flag").to_bool(|| false));
	assert_eq!(dec.at("ratio").float().expect("float stored"), 1.5);
	assert_eq!(dec.at("ratio").to_float(|| 0.0), 1.5);
	assert_eq!(dec.at("scale").to_double(|| 0.0), 2.25);

	assert_eq!(dec.at("nope").to_int(|| -1), -1);
	assert!(dec.at("nope").to_bool(|| true));
	assert_eq!(dec.at("nope").to_float(|| 0.5), 0.5);
	assert_eq!(dec.at("ratio").to_double(|| 9.0), 9.0);
	assert_eq!(dec.at("nope").as_int(), None);
	assert!(!dec.at("nope").exists());

	assert_eq!(archive.decode_i32("nope"), 0);
	assert!(!archive.decode_bool("nope"));
	assert_eq!(archive.decode_f32("nope"), 0.0);
	assert_eq!(archive.decode_f64("scale"), 2.25);
}

#[test]
fn wide_integers_agree_across_tiers() {
	let mut archive = KeyedArchive::new();
	jj_encoder(&mut archive).put(5_000_000_000_i64, "big");

	let dec = jj_decoder(&archive);
	assert_eq!(dec.at("big").as_int(), Some(5_000_000_000));
	assert_eq!(dec.at("big").int().expect("int stored"), 5_000_000_000);
	assert_eq!(dec.at("big").to_int(|| 0), 5_000_000_000);
	assert_eq!(archive.decode_i32("big"), 0);
}

#[test]
fn strict_decode_reports_key_as_path() {
	let mut archive = KeyedArchive::new();
	jj_encoder(&mut archive).put(7, "count");

	let dec = jj_decoder(&archive);
	let err = dec.at("count").string().expect_err("int is not a string");
	assert_eq!(err.to_string(), "JJError.WrongType: Can't convert 7 at path: 'count' to type 'String'");

	let err = dec.at("missing").bool().expect_err("missing bool");
	assert!(matches!(err, JjError::WrongType { value: None, ref path, to_type: "Bool" } if path == "missing"));
}

#[test]
fn dates_urls_and_time_zones_are_stored_as_strings() {
	let date = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).single().expect("valid date");
	let url = Url::parse("https://example.com/a?b=c").expect("valid url");

	let mut archive = KeyedArchive::new();
	let mut enc = jj_encoder(&mut archive);
	enc.put_date(&date, "when");
	enc.put_url(&url, "where");
	enc.put_time_zone(chrono_tz::Asia::Tokyo, "zone");

	assert_eq!(archive.decode_string("when"), Some("2020-01-02T03:04:05.000Z"));

	let dec = jj_decoder(&archive);
	assert_eq!(dec.at("when").date().expect("date stored"), date);
	assert_eq!(dec.at("where").url().expect("url stored"), url);
	assert_eq!(dec.at("zone").as_time_zone(), Some(chrono_tz::Asia::Tokyo));
	assert!(dec.at("zone").as_date().is_none());
}

#[test]
fn nested_objects_decode_by_type() {
	let author = Author {
		name: "Yury".to_owned(),
		headquarters: "AnjLab".to_owned(),
	};

	let mut archive = KeyedArchive::new();
	let mut enc = jj_encoder(&mut archive);
	enc.put_object(&author, "author");
	enc.put("plain", "title");

	let dec = jj_decoder(&archive);
	assert_eq!(dec.at("author").decode::<Author>().expect("author decodes"), author);
	assert_eq!(dec.at("author").value().at("name").string().expect("nested name"), "Yury");
	assert_eq!(dec.at("author").value().at("name").path(), "author.name");
	assert!(dec.at("title").decode_as::<Author>().is_none());

	let err = dec.at("title").decode::<Author>().expect_err("string is not an author");
	assert!(matches!(err, JjError::WrongType { to_type: "Author", .. }));
}

#[test]
fn incomplete_nested_object_fails_with_outer_key() {
	let mut archive = KeyedArchive::new();
	jj_encoder(&mut archive).put(Raw::object([("name", "Yury")]), "author");

	let err = jj_decoder(&archive).at("author").decode::<Author>().expect_err("headquarters missing");
	assert_eq!(err.path(), "author");
}

#[test]
fn archive_serializes_to_json() {
	let mut archive = KeyedArchive::new();
	let mut enc = jj_encoder(&mut archive);
	enc.put_int(1, "a");
	enc.put(None::<String>, "b");

	let json = serde_json::to_value(&archive).expect("archive serializes");
	assert_eq!(json, serde_json::json!({"a": 1, "b": null}));

	let restored = KeyedArchive::from_json(json).expect("object restores");
	assert_eq!(restored, archive);
	assert!(KeyedArchive::from_json(serde_json::json!([1])).is_none());
}
