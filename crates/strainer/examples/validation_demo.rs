//! Comprehensive demo of chains, rules and the localization bridge

use serde_json::{json, Map, Value};
use strainer::{
    validate, validate_with_context, BetweenRule, Chain, Context, DotIntRule, DotIntToSliceRule,
    EmailRule, IntRule, IntSliceRule, LengthRule, Localizer, MaxdotRule, OptionalRule,
    PaginateRule, RequiredRule, XssRule,
};

fn main() {
    tracing_subscriber::fmt().with_env_filter("strainer=trace").init();

    println!("strainer demo");
    println!("=============\n");

    demo_signup_form();
    demo_listing_query();
    demo_localized_errors();

    println!("done.");
}

fn params(entries: &[(&str, Value)]) -> Map<String, Value> {
    let mut m = Map::new();
    for (k, v) in entries {
        m.insert(k.to_string(), v.clone());
    }
    m
}

fn demo_signup_form() {
    println!("signup form");
    println!("-----------");

    let input = params(&[
        ("email", json!("user@example.com")),
        ("name", json!("Ada")),
        ("age", json!("36")),
        ("bio", json!("<script>alert(1)</script>hello")),
    ]);

    let chains = vec![
        Chain::new("email")
            .rule(RequiredRule::new())
            .rule(EmailRule::new())
            .message("a valid email is required"),
        Chain::new("name")
            .rule(RequiredRule::new())
            .rule(LengthRule::new(1, 40)),
        Chain::new("age")
            .rule(OptionalRule::new().default_value(18))
            .rule(IntRule::new())
            .rule(BetweenRule::new(13, 120)),
        Chain::new("bio").rule(OptionalRule::new()).rule(XssRule::new()),
    ];

    match validate(&input, &chains) {
        Ok(res) => {
            println!("  cleaned: {}", Value::Object(res.values.clone()));
            println!("  age as int: {:?}\n", res.int("age"));
        }
        Err(err) => println!("  rejected: {} (code {})\n", err, err.code),
    }
}

fn demo_listing_query() {
    println!("listing query");
    println!("-------------");

    let input = params(&[
        ("curpage", json!("3")),
        ("perpage", json!(25)),
        ("ids", json!("5,6,7")),
        ("flags", json!(["1", "2"])),
    ]);

    let chains = vec![
        Chain::new("curpage").rule(OptionalRule::new().default_value(1)).rule(IntRule::new()),
        Chain::new("perpage").rule(OptionalRule::new().default_value(10)).rule(IntRule::new()),
        Chain::new("paging").rule(PaginateRule::new()),
        Chain::new("ids")
            .rule(RequiredRule::new())
            .rule(DotIntRule::new())
            .rule(MaxdotRule::new(10))
            .rule(DotIntToSliceRule::new())
            .message("ids must be a short comma-separated list"),
        Chain::new("flags").rule(
            IntSliceRule::new()
                .message("unknown flag")
                .check(strainer_check::enum_int(vec![1, 2, 3])),
        ),
    ];

    match validate(&input, &chains) {
        Ok(res) => {
            println!("  cleaned: {}", Value::Object(res.values.clone()));
            println!("  offset: {:?}\n", res.int("offset"));
        }
        Err(err) => println!("  rejected: {} (code {})\n", err, err.code),
    }
}

struct DemoLocalizer;

impl Localizer for DemoLocalizer {
    fn localize(&self, id: &str) -> String {
        match id {
            "errors.age.int" => "age must be a whole number".to_string(),
            other => other.to_string(),
        }
    }
}

fn demo_localized_errors() {
    println!("localized errors");
    println!("----------------");

    let input = params(&[("age", json!("abc"))]);
    let chains = vec![Chain::new("age")
        .rule(IntRule::new())
        .message("errors.age.int")
        .code(422)
        .localized()];

    let ctx = Context::new().with_localizer(DemoLocalizer);
    match validate_with_context(&ctx, &input, &chains) {
        Ok(_) => println!("  unexpectedly accepted\n"),
        Err(err) => println!("  rejected: {} (code {})\n", err, err.code),
    }
}
