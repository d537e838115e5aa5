//! Tests for the code analysis.

use super::{analysis, detect_usage, load_rules, parse_rules, CallerStrategy, Category, Evidence};
use crate::{
    config::Config,
    criticality::Criticality,
    model::{pattern, Instruction, MethodId, Program, ProgramBuilder},
    results::Results,
};

/// Prints information about the given error.
fn print_error(e: &anyhow::Error) {
    eprintln!("Error: {}", e);
    for cause in e.chain().skip(1) {
        eprintln!("\tCaused by: {}", cause);
    }
}

/// Adds `javax.crypto.Cipher.getInstance` as a library method.
fn cipher_get_instance(builder: &mut ProgramBuilder) -> MethodId {
    let cipher = builder.class("Ljavax/crypto/Cipher;", true);
    builder.external_method(
        cipher,
        "getInstance",
        "(Ljava/lang/String;)Ljavax/crypto/Cipher;",
    )
}

/// Adds an application method loading the given transformation and calling `target`.
fn cipher_user(
    builder: &mut ProgramBuilder,
    class: &str,
    transformation: &str,
    target: MethodId,
) -> MethodId {
    let class = builder.class(class, false);
    let method = builder.method(
        class,
        "encrypt",
        "([B)[B",
        vec![
            Instruction::const_string(0, transformation),
            Instruction::new("invoke-static", Vec::new()),
        ],
        None,
    );
    builder.call(method, target, 1);
    method
}

const CRYPTO_RULES: &str = r#"[
    {
        "label": "ECB mode encryption",
        "description": "Block cipher used in ECB mode",
        "criticality": "high",
        "category": "ecb_mode",
        "class_regex": "Ljavax/crypto/Cipher",
        "method_regex": "getInstance",
        "evidence": { "const_string": "(?i)AES/ECB" }
    },
    {
        "label": "RSA without OAEP padding",
        "description": "RSA used without padding",
        "criticality": "high",
        "category": "rsa_no_padding",
        "class_regex": "Ljavax/crypto/Cipher",
        "method_regex": "getInstance",
        "evidence": { "const_string": "(?i)rsa/.+/nopadding" }
    }
]"#;

#[test]
fn it_stops_at_the_first_qualifying_caller() {
    let mut builder = Program::builder();
    let get_instance = cipher_get_instance(&mut builder);
    let _ = cipher_user(&mut builder, "Lcom/example/Safe;", "AES/GCM/NoPadding", get_instance);
    let _ = cipher_user(&mut builder, "Lcom/example/Vault;", "AES/ECB/PKCS5Padding", get_instance);
    let _ = cipher_user(&mut builder, "Lcom/example/Store;", "AES/ECB/NoPadding", get_instance);
    let program = builder.build();

    let rules = parse_rules(CRYPTO_RULES.as_bytes(), Criticality::Warning).unwrap();
    let ecb = &rules[0];

    let first = ecb.apply(&program, CallerStrategy::FirstRepresentative);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].category(), Category::EcbMode);
    assert_eq!(first[0].class(), "Lcom/example/Vault;");
    assert_eq!(first[0].method(), "encrypt");
    assert_eq!(first[0].evidence(), Some("AES/ECB/PKCS5Padding"));

    let all = ecb.apply(&program, CallerStrategy::Exhaustive);
    let classes: Vec<_> = all.iter().map(|finding| finding.class()).collect();
    assert_eq!(classes, ["Lcom/example/Vault;", "Lcom/example/Store;"]);
}

#[test]
fn it_separates_ecb_from_rsa() {
    let mut builder = Program::builder();
    let get_instance = cipher_get_instance(&mut builder);
    let _ = cipher_user(
        &mut builder,
        "Lcom/example/Keys;",
        "RSA/ECB/NoPadding",
        get_instance,
    );
    let program = builder.build();

    let rules = parse_rules(CRYPTO_RULES.as_bytes(), Criticality::Warning).unwrap();
    let ecb = rules[0].apply(&program, CallerStrategy::Exhaustive);
    let rsa = rules[1].apply(&program, CallerStrategy::Exhaustive);

    assert!(ecb.is_empty());
    assert_eq!(rsa.len(), 1);
    assert_eq!(rsa[0].category(), Category::RsaNoPadding);
}

#[test]
fn it_skips_callers_that_can_not_be_inspected() {
    let mut builder = Program::builder();
    let get_instance = cipher_get_instance(&mut builder);

    let library = builder.class("Lorg/library/Crypto;", true);
    let library_caller = builder.method(
        library,
        "encrypt",
        "([B)[B",
        vec![Instruction::const_string(0, "AES/ECB/PKCS5Padding")],
        None,
    );
    builder.call(library_caller, get_instance, 1);

    let app = builder.class("Lcom/example/Obfuscated;", false);
    let undecompiled = builder.external_method(app, "a", "()V");
    builder.call(undecompiled, get_instance, 0);
    let program = builder.build();

    let rules = parse_rules(CRYPTO_RULES.as_bytes(), Criticality::Warning).unwrap();
    assert!(rules[0]
        .apply(&program, CallerStrategy::Exhaustive)
        .is_empty());
}

#[test]
fn it_reports_each_caller_once() {
    let mut builder = Program::builder();
    let get_instance = cipher_get_instance(&mut builder);
    let caller = cipher_user(
        &mut builder,
        "Lcom/example/Vault;",
        "AES/ECB/PKCS5Padding",
        get_instance,
    );
    builder.call(caller, get_instance, 7);
    let program = builder.build();

    let rules = parse_rules(CRYPTO_RULES.as_bytes(), Criticality::Warning).unwrap();
    assert_eq!(rules[0].apply(&program, CallerStrategy::Exhaustive).len(), 1);
}

#[test]
fn it_finds_nothing_without_targets() {
    let mut builder = Program::builder();
    let get_instance = cipher_get_instance(&mut builder);
    let _ = cipher_user(
        &mut builder,
        "Lcom/example/Vault;",
        "AES/ECB/PKCS5Padding",
        get_instance,
    );
    let program = builder.build();

    for &strategy in &[CallerStrategy::FirstRepresentative, CallerStrategy::Exhaustive] {
        let by_class = detect_usage(
            &program,
            &pattern("Lcom/none/Nothing").unwrap(),
            &pattern(".*").unwrap(),
            None,
            Category::EcbMode,
            strategy,
        );
        let by_name = detect_usage(
            &program,
            &pattern("Ljavax/crypto/Cipher").unwrap(),
            &pattern("doFinal").unwrap(),
            None,
            Category::EcbMode,
            strategy,
        );
        assert!(by_class.is_empty());
        assert!(by_name.is_empty());
    }
}

#[test]
fn it_gives_the_same_findings_on_every_run() {
    let mut builder = Program::builder();
    let get_instance = cipher_get_instance(&mut builder);
    let _ = cipher_user(&mut builder, "Lcom/example/Vault;", "AES/ECB/PKCS5Padding", get_instance);
    let _ = cipher_user(&mut builder, "Lcom/example/Store;", "AES/ECB/NoPadding", get_instance);
    let _ = cipher_user(&mut builder, "Lcom/example/Keys;", "RSA/NONE/NoPadding", get_instance);
    let program = builder.build();

    let rules = parse_rules(CRYPTO_RULES.as_bytes(), Criticality::Warning).unwrap();
    let first = rules[0].apply(&program, CallerStrategy::Exhaustive);
    let second = rules[0].apply(&program, CallerStrategy::Exhaustive);
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);

    let mut results = Results::new("app", None);
    analysis(&program, &rules, &Config::default(), &mut results);
    analysis(&program, &rules, &Config::default(), &mut results);
    assert_eq!(results.findings(Category::EcbMode), first.as_slice());
    assert_eq!(results.findings(Category::RsaNoPadding).len(), 1);
}

#[test]
fn it_reroutes_encrypted_databases() {
    let mut builder = Program::builder();
    let db = builder.class("Landroid/database/sqlite/SQLiteDatabase;", true);
    let exec = builder.external_method(db, "execSQL", "(Ljava/lang/String;)V");

    let helper = builder.class("Lcom/example/DbHelper;", false);
    let open = builder.method(
        helper,
        "open",
        "()V",
        vec![Instruction::const_string(0, "PRAGMA key = 'hunter2'")],
        Some("db.execSQL(\"PRAGMA key = 'hunter2'\");"),
    );
    let migrate = builder.method(
        helper,
        "migrate",
        "()V",
        vec![Instruction::const_string(0, "ALTER TABLE users")],
        Some("db.execSQL(\"ALTER TABLE users\");"),
    );
    builder.call(open, exec, 1);
    builder.call(migrate, exec, 1);
    let program = builder.build();

    let rules = parse_rules(
        r#"[{
            "label": "Raw SQL query",
            "description": "Raw SQL statements",
            "criticality": "medium",
            "category": "sql_raw_query",
            "class_regex": "Landroid/database/sqlite/.*",
            "method_regex": "execSQL|rawQuery",
            "reroute": {
                "evidence": { "source": "PRAGMA key" },
                "category": "sql_hardcoded_secret"
            }
        }]"#
        .as_bytes(),
        Criticality::Warning,
    )
    .unwrap();

    let findings = rules[0].apply(&program, CallerStrategy::Exhaustive);
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].category(), Category::SqlHardcodedSecret);
    assert_eq!(findings[0].method(), "open");
    assert_eq!(findings[0].evidence(), Some("PRAGMA key"));
    assert_eq!(findings[1].category(), Category::SqlRawQuery);
    assert_eq!(findings[1].method(), "migrate");
    assert_eq!(findings[1].evidence(), None);
}

#[test]
fn it_ignores_excluded_callers() {
    let mut builder = Program::builder();
    let random = builder.class("Ljava/util/Random;", true);
    let next_int = builder.external_method(random, "nextInt", "()I");

    let kotlin = builder.class("Lkotlin/random/PlatformRandom;", false);
    let wrapped = builder.method(kotlin, "nextInt", "()I", Vec::new(), None);
    builder.call(wrapped, next_int, 0);

    let game = builder.class("Lcom/example/Dice;", false);
    let roll = builder.method(game, "roll", "()I", Vec::new(), None);
    builder.call(roll, next_int, 0);
    let program = builder.build();

    let rules = parse_rules(
        r#"[{
            "label": "Insecure random number generator",
            "description": "Predictable random numbers",
            "criticality": "low",
            "category": "insecure_random",
            "class_regex": "Ljava/util/Random|Lkotlin/random/Random",
            "method_regex": "next\\s*",
            "excluded_callers": "Lkotlin"
        }]"#
        .as_bytes(),
        Criticality::Warning,
    )
    .unwrap();

    let findings = rules[0].apply(&program, CallerStrategy::FirstRepresentative);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].class(), "Lcom/example/Dice;");
}

#[test]
fn it_checks_the_source_of_web_view_callers() {
    let mut builder = Program::builder();
    let web_view = builder.class("Landroid/webkit/WebView;", true);
    let debugging = builder.external_method(web_view, "setWebContentsDebuggingEnabled", "(Z)V");

    let browser = builder.class("Lcom/example/Browser;", false);
    let no_source = builder.method(browser, "init", "()V", Vec::new(), None);
    let disabled = builder.method(
        browser,
        "release",
        "()V",
        Vec::new(),
        Some("WebView.setWebContentsDebuggingEnabled(false);"),
    );
    let enabled = builder.method(
        browser,
        "debug",
        "()V",
        Vec::new(),
        Some("WebView.setWebContentsDebuggingEnabled(true);"),
    );
    builder.call(no_source, debugging, 0);
    builder.call(disabled, debugging, 0);
    builder.call(enabled, debugging, 0);
    let program = builder.build();

    let evidence = Evidence::source(r"setWebContentsDebuggingEnabled\((1|true)\)").unwrap();
    let findings = detect_usage(
        &program,
        &pattern("Landroid/webkit/WebView").unwrap(),
        &pattern("setWebContentsDebuggingEnabled").unwrap(),
        Some(&evidence),
        Category::WebViewDebugging,
        CallerStrategy::Exhaustive,
    );

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].method(), "debug");
    assert_eq!(
        findings[0].evidence(),
        Some("setWebContentsDebuggingEnabled(true)")
    );
}

#[test]
fn it_finds_root_binaries_in_the_string_pool() {
    let mut builder = Program::builder();
    let checker = builder.class("Lcom/example/RootCheck;", false);
    let is_rooted = builder.method(
        checker,
        "isRooted",
        "()Z",
        vec![Instruction::const_string(0, "/system/app/Superuser.apk")],
        None,
    );
    let also_rooted = builder.method(checker, "isRootedToo", "()Z", Vec::new(), None);
    builder.string("/system/app/Superuser.apk", &[is_rooted, also_rooted]);
    builder.string("/system/bin/sh", &[is_rooted]);
    builder.string("/system/sd/xbin/su", &[]);
    let program = builder.build();

    let rules = parse_rules(
        r#"[{
            "label": "Root binary lookup",
            "description": "Looks for superuser binaries",
            "criticality": "warning",
            "category": "root_detection",
            "string_regex": "/system/app/Superuser.apk|/system/bin/failsafe/su|/system/sd/xbin/su"
        }]"#
        .as_bytes(),
        Criticality::Warning,
    )
    .unwrap();

    let first = rules[0].apply(&program, CallerStrategy::FirstRepresentative);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].method(), "isRooted");
    assert_eq!(first[0].evidence(), Some("/system/app/Superuser.apk"));

    let all = rules[0].apply(&program, CallerStrategy::Exhaustive);
    assert_eq!(all.len(), 2);
}

#[test]
fn it_stores_findings_in_the_results() {
    let mut builder = Program::builder();
    let get_instance = cipher_get_instance(&mut builder);
    let _ = cipher_user(&mut builder, "Lcom/example/Vault;", "AES/ECB/PKCS5Padding", get_instance);
    let _ = cipher_user(&mut builder, "Lcom/example/Keys;", "RSA/NONE/NoPadding", get_instance);
    let program = builder.build();

    let rules = parse_rules(CRYPTO_RULES.as_bytes(), Criticality::Warning).unwrap();
    let mut results = Results::new("app", None);
    analysis(&program, &rules, &Config::default(), &mut results);

    assert_eq!(results.findings(Category::EcbMode).len(), 1);
    assert_eq!(results.findings(Category::RsaNoPadding).len(), 1);
    assert!(results.findings(Category::WeakHash).is_empty());
}

#[test]
fn it_loads_the_shipped_rules() {
    let rules = match load_rules(&Config::default()) {
        Ok(rules) => rules,
        Err(e) => {
            print_error(&e);
            panic!("could not load the rules");
        }
    };
    assert_eq!(rules.len(), 14);
    assert!(rules.iter().all(|rule| !rule.description().is_empty()));

    let high = parse_rules(
        std::fs::File::open("rules.json").unwrap(),
        Criticality::High,
    )
    .unwrap();
    assert_eq!(high.len(), 5);
    assert!(high
        .iter()
        .all(|rule| rule.criticality() >= Criticality::High));
}

#[test]
fn it_rejects_invalid_rules() {
    let both_targets = r#"[{
        "label": "Broken",
        "description": "Two targets",
        "criticality": "low",
        "category": "weak_hash",
        "class_regex": "Ljava/security/MessageDigest",
        "string_regex": "md5"
    }]"#;
    assert!(parse_rules(both_targets.as_bytes(), Criticality::Warning).is_err());

    let string_with_evidence = r#"[{
        "label": "Broken",
        "description": "Evidence on a string rule",
        "criticality": "low",
        "category": "root_detection",
        "string_regex": "/system/xbin/su",
        "evidence": { "source": "su" }
    }]"#;
    assert!(parse_rules(string_with_evidence.as_bytes(), Criticality::Warning).is_err());

    let bad_regex = r#"[{
        "label": "Broken",
        "description": "Unbalanced pattern",
        "criticality": "low",
        "category": "weak_hash",
        "class_regex": "Ljava/security/(MessageDigest"
    }]"#;
    assert!(parse_rules(bad_regex.as_bytes(), Criticality::Warning).is_err());

    let unknown_category = r#"[{
        "label": "Broken",
        "description": "Unknown bucket",
        "criticality": "low",
        "category": "telemetry",
        "class_regex": "Ljava/security/MessageDigest"
    }]"#;
    assert!(parse_rules(unknown_category.as_bytes(), Criticality::Warning).is_err());
}
