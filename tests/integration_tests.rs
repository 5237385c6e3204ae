use serde::Deserialize;
use variant_json::{
    describe, from_reader, from_str, from_str_with_options, from_value, to_string, to_writer,
    DecodeOptions, Error, Lambda, NumberFormat, Symbol, Tag, Variant, DEFAULT_MAX_DEPTH,
};

fn num(text: &str) -> Variant {
    Variant::Number(text.to_string())
}

fn assert_roundtrip(value: &Variant) {
    let json = to_string(value);
    println!("Encoded: {}", json);

    let back = from_str(&json).unwrap();
    assert_eq!(&back, value);
}

#[test]
fn test_numeric_canonicalization() {
    assert_eq!(from_str("1.50").unwrap(), num("1.5"));
    assert_eq!(from_str("1.0").unwrap(), num("1"));
    assert_eq!(from_str("-0.125").unwrap(), num("-0.125"));
    assert_eq!(from_str("2e3").unwrap(), num("2000"));
}

#[test]
fn test_large_integers_lose_precision() {
    // 2^53 + 1 has no exact f64.
    assert_eq!(from_str("9007199254740993").unwrap(), num("9007199254740992"));

    let exact = DecodeOptions::new().with_number_format(NumberFormat::Exact);
    assert_eq!(
        from_str_with_options("9007199254740993", &exact).unwrap(),
        num("9007199254740993")
    );
}

#[test]
fn test_object_flattening() {
    let value = from_str(r#"{"a":1,"b":2}"#).unwrap();
    assert_eq!(
        value,
        Variant::Symbol(Symbol {
            name: String::new(),
            entries: vec![
                Variant::from("a"),
                num("1"),
                Variant::from("b"),
                num("2"),
            ],
        })
    );
}

#[test]
fn test_object_source_order_is_kept() {
    let value = from_str(r#"{"zulu": 1, "alpha": 2, "mike": 3}"#).unwrap();
    let keys: Vec<_> = value
        .to_map()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
}

#[test]
fn test_empty_object() {
    assert_eq!(from_str("{}").unwrap(), Variant::empty_symbol());
}

#[test]
fn test_array_order_preservation() {
    assert_eq!(
        from_str("[3,1,2]").unwrap(),
        Variant::List(vec![num("3"), num("1"), num("2")])
    );
}

#[test]
fn test_null_and_booleans_fall_back_to_empty_symbol() {
    let null = from_str("null").unwrap();
    let yes = from_str("true").unwrap();
    let no = from_str("false").unwrap();
    assert_eq!(null, Variant::make_default(Tag::Symbol));
    assert_eq!(null, yes);
    assert_eq!(yes, no);
}

#[test]
fn test_malformed_input() {
    for input in ["{invalid", "", "[1,]", "\"unterminated", "1 2"] {
        match from_str(input) {
            Err(Error::Parse { msg, .. }) => assert!(!msg.is_empty()),
            other => panic!("expected parse error for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_depth_limit_on_text() {
    let options = DecodeOptions::new().with_max_depth(4);
    let shallow = "[[[[1]]]]";
    let deep = "[[[[[1]]]]]";
    assert!(from_str_with_options(shallow, &options).is_ok());
    assert!(matches!(
        from_str_with_options(deep, &options),
        Err(Error::DepthExceeded { limit: 4 })
    ));
}

#[test]
fn test_deep_tree_built_in_memory() {
    let mut node = serde_json::json!("leaf");
    for _ in 0..(DEFAULT_MAX_DEPTH + 1) {
        node = serde_json::Value::Array(vec![node]);
    }
    assert!(matches!(
        from_value(&node),
        Err(Error::DepthExceeded { .. })
    ));
}

#[test]
fn test_default_depth_limit_on_text() {
    let deep = format!("{}1{}", "[".repeat(128), "]".repeat(128));
    assert!(matches!(
        from_str(&deep),
        Err(Error::DepthExceeded { limit: 64 })
    ));

    let within = format!("{}1{}", "[".repeat(DEFAULT_MAX_DEPTH), "]".repeat(DEFAULT_MAX_DEPTH));
    assert!(from_str(&within).is_ok());
}

#[test]
fn test_invalid_number_text_encodes_as_valid_json() {
    let value = Variant::List(vec![Variant::make_default(Tag::Number), num("7")]);
    let json = to_string(&value);
    assert_eq!(json, "[{},7]");
    assert_eq!(
        from_str(&json).unwrap(),
        Variant::List(vec![Variant::empty_symbol(), num("7")])
    );
}

#[test]
fn test_encode_callables() {
    fn add(args: &[Variant]) -> Variant {
        let total: f64 = args.iter().filter_map(Variant::as_f64).sum();
        Variant::try_from(total).unwrap_or_else(|_| Variant::empty_symbol())
    }

    let builtin = Variant::callable(add);
    assert_eq!(to_string(&builtin), "{}");

    let lambda = Variant::Lambda(Lambda::new(
        vec!["x".to_string()],
        Variant::with_text(Tag::Symbol, "x"),
    ));
    assert_eq!(to_string(&lambda), "{}");

    if let Variant::Proc(p) = &builtin {
        assert_eq!(p.call(&[Variant::from(1), num("2.5")]), Some(num("3.5")));
    }
}

#[test]
fn test_decoded_object_does_not_reencode_as_object() {
    let value = from_str(r#"{"k": "v"}"#).unwrap();
    assert_eq!(to_string(&value), "\"\"");

    let nested = from_str(r#"[1, {"k": "v"}]"#).unwrap();
    assert_eq!(to_string(&nested), r#"[1,""]"#);
}

#[test]
fn test_roundtrips() {
    assert_roundtrip(&Variant::List(vec![]));
    assert_roundtrip(&num("42"));
    assert_roundtrip(&Variant::from("hello world"));
    assert_roundtrip(&Variant::from("quote \" backslash \\ newline \n bell \u{7}"));
    assert_roundtrip(&Variant::from("unicode: 日本語 🦀"));
    assert_roundtrip(&Variant::List(vec![
        num("1"),
        Variant::from("two"),
        Variant::List(vec![num("3.25"), Variant::List(vec![])]),
    ]));
}

#[test]
fn test_symbol_encodes_as_string() {
    let sym = Variant::with_text(Tag::Symbol, "lambda");
    let json = to_string(&sym);
    assert_eq!(json, "\"lambda\"");
    assert_eq!(from_str(&json).unwrap(), Variant::from("lambda"));
}

#[test]
fn test_reader_and_writer() {
    let input = br#"{"xs": [1, 2]}"#;
    let value = from_reader(&input[..]).unwrap();
    assert_eq!(
        describe(&value),
        "Symbol: {Cadena: \"xs\", List: [Number: 1, Number: 2]}"
    );

    let mut out = Vec::new();
    to_writer(&mut out, &Variant::List(vec![num("1"), Variant::from("a")])).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), r#"[1,"a"]"#);
}

#[test]
fn test_variant_inside_serde_struct() {
    #[derive(Deserialize)]
    struct Envelope {
        id: u32,
        payload: Variant,
    }

    let envelope: Envelope =
        serde_json::from_str(r#"{"id": 7, "payload": ["car", 1.50, null]}"#).unwrap();
    assert_eq!(envelope.id, 7);
    assert_eq!(
        envelope.payload,
        Variant::List(vec![
            Variant::from("car"),
            num("1.5"),
            Variant::empty_symbol()
        ])
    );
}

#[test]
fn test_concurrent_decoding() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let json = format!("[{}, \"t{}\"]", i, i);
                from_str(&json).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.join().unwrap();
        assert_eq!(
            value,
            Variant::List(vec![num(&i.to_string()), Variant::from(format!("t{}", i))])
        );
    }
}
