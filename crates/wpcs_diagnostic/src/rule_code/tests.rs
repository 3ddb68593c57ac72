use super::*;

#[test]
fn test_rule_code_display() {
    assert_eq!(RuleCode::NotYoda.as_str(), "NotYoda");
    assert_eq!(
        RuleCode::NotYoda.to_string(),
        "WordPress.PHP.YodaConditions.NotYoda"
    );
    assert_eq!(RuleCode::NotYoda.full_code(), RuleCode::NotYoda.to_string());
}

#[test]
fn test_rule_code_parses_short_and_full_forms() {
    assert_eq!("NotYoda".parse::<RuleCode>(), Ok(RuleCode::NotYoda));
    assert_eq!(
        "WordPress.PHP.YodaConditions.NotYoda".parse::<RuleCode>(),
        Ok(RuleCode::NotYoda)
    );
}

#[test]
fn test_rule_code_rejects_unknown() {
    let err = "WordPress.PHP.YodaConditions".parse::<RuleCode>();
    assert_eq!(
        err,
        Err(ParseRuleCodeError("WordPress.PHP.YodaConditions".to_owned()))
    );
    assert_eq!(
        ParseRuleCodeError("Nope".into()).to_string(),
        "unknown rule code `Nope`"
    );
}

#[test]
fn test_every_code_round_trips_through_full_code() {
    for code in RuleCode::ALL {
        assert_eq!(code.full_code().parse::<RuleCode>(), Ok(code));
    }
}
