mod common;

use std::collections::BTreeSet;

use kiln::{
    pdf::{LiteralString, Name, Object, Reference, UsedObject, Xref, XrefEntry},
    serialize, EncodeOptions, Eol, PdfWriter, WriterConfig,
};
use proptest::prelude::*;

fn options() -> impl Strategy<Value = EncodeOptions> {
    (
        prop_oneof![Just(Eol::Lf), Just(Eol::Cr), Just(Eol::CrLf)],
        any::<bool>(),
    )
        .prop_map(|(eol, keep_ascii)| EncodeOptions::default().with_eol(eol).with_keep_ascii(keep_ascii))
}

/// Undo the `#xx` escapes of an encoded name.
fn decode_name(encoded: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut bytes = encoded.iter();
    while let Some(&c) = bytes.next() {
        if c == b'#' {
            let digits: Vec<u8> = bytes.by_ref().take(2).copied().collect();
            out.extend(hex::decode(digits).expect("two hex digits"));
        } else {
            out.push(c);
        }
    }
    out
}

proptest! {
    #[test]
    fn literal_strings_read_back(raw in proptest::collection::vec(any::<u8>(), 0..64), options in options()) {
        let out = serialize(&Object::String(LiteralString::from(raw.clone())), options).unwrap();
        let (remainder, decoded) = common::literal_string(&out).unwrap();
        prop_assert!(remainder.is_empty());
        prop_assert_eq!(decoded, raw);
        if options.keep_ascii {
            prop_assert!(out.iter().all(|c| (0x20..=0x7e).contains(c)));
        }
    }

    #[test]
    fn parenthesis_heavy_strings_read_back(raw in "[()\\\\a]{0,24}") {
        let out = serialize(&Object::String(LiteralString::from(raw.as_str())), EncodeOptions::default()).unwrap();
        let (_, decoded) = common::literal_string(&out).unwrap();
        prop_assert_eq!(decoded, raw.into_bytes());
    }

    #[test]
    fn names_are_injective(a in proptest::collection::vec(any::<u8>(), 0..16), b in proptest::collection::vec(any::<u8>(), 0..16)) {
        let encode = |raw: &[u8]| serialize(&Object::Name(Name::from(raw)), EncodeOptions::default()).unwrap();
        let (encoded_a, encoded_b) = (encode(&a), encode(&b));
        prop_assert_eq!(a == b, encoded_a == encoded_b);
        prop_assert_eq!(decode_name(&encoded_a[1..]), a);
        prop_assert!(encoded_a[1..].iter().all(|c| c.is_ascii_alphanumeric() || *c == b'#'));
    }

    #[test]
    fn subsections_are_contiguous(numbers in proptest::collection::btree_set(0u32..200, 0..40)) {
        let entries: Vec<XrefEntry> = numbers
            .iter()
            .rev()
            .map(|&number| UsedObject { number, byte_offset: number as usize * 10, generation: 0 }.into())
            .collect();
        let xref = Xref::from_entries(entries).unwrap();

        let mut seen = BTreeSet::new();
        let mut previous_end: Option<u32> = None;
        for subsection in xref.subsections() {
            prop_assert!(subsection.count() > 0);
            if let Some(end) = previous_end {
                // a gap separates two subsections
                prop_assert!(subsection.first > end + 1);
            }
            for (i, entry) in subsection.entries.iter().enumerate() {
                prop_assert_eq!(entry.number(), subsection.first + i as u32);
                seen.insert(entry.number());
            }
            previous_end = Some(subsection.first + subsection.count() as u32 - 1);
        }
        prop_assert_eq!(seen, numbers);
    }

    #[test]
    fn offsets_point_at_objects(
        values in proptest::collection::vec(any::<i64>(), 1..12),
        comment in proptest::collection::vec(b'a'..=b'z', 0..40),
        options in options(),
    ) {
        let mut writer = PdfWriter::new(WriterConfig::default().with_encode(options));
        writer.write_header((1, 7), true);
        writer.write_comment(&comment);

        for (i, &value) in values.iter().enumerate() {
            writer.write_object(Reference::new(i as u32 + 1, 0), &Object::Integer(value)).unwrap();
        }
        let xref = Xref::from_entries(writer.used_entries()).unwrap();
        writer.write_xref_table(&xref).unwrap();
        let document = writer.into_bytes();

        for row in xref.used_objects() {
            let (_, (number, generation, body)) = common::indirect_object(&document[row.byte_offset..]).unwrap();
            prop_assert_eq!(number, row.number);
            prop_assert_eq!(generation, 0);
            let expected = values[number as usize - 1].to_string();
            prop_assert_eq!(body, expected.as_bytes());
        }
    }
}
