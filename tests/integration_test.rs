use chrono::NaiveDate;
use nordic_validators::{
    account_number_check, is_leap_year, is_valid_danish_ssn, is_valid_date, is_valid_finnish_ssn,
    is_valid_norwegian_ssn, is_valid_norwegian_ssn_at, is_valid_swedish_ssn, BankAccount,
    BankRegistry, BankSpecConfig, ChecksumAlgorithm, Comment, Validator, ValidatorKind,
    INVALID_METRIC, VALID_METRIC,
};
use strum::IntoEnumIterator;

#[test]
fn calendar_dates() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2020));
    assert!(!is_leap_year(2021));

    assert!(is_valid_date(2020, 2, 29));
    assert!(!is_valid_date(2021, 2, 29));
    assert!(!is_valid_date(2021, 4, 31));
    assert!(!is_valid_date(2021.5, 12, 25));
}

#[test]
fn national_identity_numbers() {
    assert!(is_valid_swedish_ssn("202302185760"));
    assert!(!is_valid_swedish_ssn("193207264172"));
    assert!(!is_valid_swedish_ssn("199902294171"));
    assert!(!is_valid_swedish_ssn(""));

    assert!(is_valid_danish_ssn("0101011234"));
    assert!(!is_valid_danish_ssn("2902991234"));
    assert!(!is_valid_danish_ssn("01010112345"));

    // FH-numbers carry no birth date, whatever today is
    assert!(is_valid_norwegian_ssn("80000000098"));
    assert!(is_valid_norwegian_ssn("30078512470"));
    // born 1899-01-01
    assert!(!is_valid_norwegian_ssn("01019960028"));

    assert!(is_valid_finnish_ssn("010195+433X"));
    assert!(is_valid_finnish_ssn("010197-100P"));
    assert!(is_valid_finnish_ssn("010114A173M"));
}

#[test]
fn norwegian_age_is_checked_as_of_the_given_day() {
    let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    // born 1900-06-15
    assert!(is_valid_norwegian_ssn_at("15060010150", day(2025, 6, 14)));
    assert!(!is_valid_norwegian_ssn_at("15060010150", day(2025, 6, 15)));
    // born 1985-07-30, before birth
    assert!(!is_valid_norwegian_ssn_at("30078512470", day(1985, 7, 29)));
    assert!(is_valid_norwegian_ssn_at("30078512470", day(1985, 7, 30)));
}

#[test]
fn bank_accounts() {
    assert_eq!(
        account_number_check("3300-7505092556"),
        Some(BankAccount {
            bank: "Nordea Personkonto".to_string(),
            clearing: "3300".to_string(),
            number: "7505092556".to_string(),
        })
    );
    assert_eq!(
        account_number_check("9660-1000010"),
        Some(BankAccount {
            bank: "Svea Bank".to_string(),
            clearing: "9660".to_string(),
            number: "1000010".to_string(),
        })
    );
    assert_eq!(account_number_check("1234567890"), None);
}

#[test]
fn custom_bank_registry_from_json() {
    let configs: Vec<BankSpecConfig> = serde_json::from_str(
        r#"[
            {"name": "Bank A", "pattern": "^1[0-9]{10}$", "account_type": "type1", "comment": "two"},
            {"name": "Bank B", "pattern": "^[0-9]{11}$", "excluded_prefixes": ["1"], "algorithm": "mod10"}
        ]"#,
    )
    .unwrap();
    assert_eq!(
        configs[0],
        BankSpecConfig::type1("Bank A", "^1[0-9]{10}$", Comment::Two)
    );
    assert_eq!(configs[1].algorithm, ChecksumAlgorithm::Mod10);

    let registry = BankRegistry::from_config(&configs).unwrap();
    // mod 10 over the account number only
    assert_eq!(
        registry.check("2000-0000018"),
        Some(BankAccount {
            bank: "Bank B".to_string(),
            clearing: "2000".to_string(),
            number: "0000018".to_string(),
        })
    );
    assert_eq!(registry.check("2000-0000019"), None);
}

#[test]
fn validators_never_panic() {
    let long_input = "9".repeat(10_000);
    let inputs = [
        "",
        " ",
        "-",
        "+",
        "é",
        "0",
        "ÅÄÖ-ÆØ",
        "１２３４５６７８９０１",
        "\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}",
        "01019é-4333",
        "999999-9999",
        "00000000000",
        long_input.as_str(),
    ];
    for input in inputs {
        for kind in ValidatorKind::iter() {
            let first = kind.is_valid_match(input);
            assert_eq!(first, kind.is_valid_match(input), "{kind} is not pure");
        }
    }
}

#[test]
fn validations_are_reported_as_metrics() {
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        assert!(is_valid_finnish_ssn("010197-100P"));
        assert!(!is_valid_finnish_ssn("290200-101P"));
        assert!(account_number_check("1234567890").is_none());
    });

    let snapshot = snapshotter.snapshot().into_hashmap();
    let counter_value = |name: &'static str, labels: Vec<Label>| {
        snapshot
            .get(&CompositeKey::new(Counter, Key::from_parts(name, labels)))
            .map(|(_, _, value)| value)
    };

    assert_eq!(
        counter_value(VALID_METRIC, vec![Label::new("validator", "finnish_ssn")]),
        Some(&DebugValue::Counter(1))
    );
    assert_eq!(
        counter_value(
            INVALID_METRIC,
            vec![
                Label::new("validator", "finnish_ssn"),
                Label::new("reason", "date")
            ]
        ),
        Some(&DebugValue::Counter(1))
    );
    assert_eq!(
        counter_value(
            INVALID_METRIC,
            vec![
                Label::new("validator", "swedish_bank_account"),
                Label::new("reason", "format")
            ]
        ),
        Some(&DebugValue::Counter(1))
    );
}
