//! Conformance runner: the generic writer against the hand-written populate
//! path and against fixed expected documents.
use colored::Colorize;
use indexmap::IndexMap;
use json_reflect::populate::{
    populate_array, populate_bool, populate_dict, populate_double, populate_long, populate_null,
    populate_string, populate_struct,
};
use json_reflect::samples::{FlatRecord, Inner, Outer};
use json_reflect::{encode, to_tree, Format, Value};
use once_cell::sync::Lazy;

enum Expect {
    /// must agree byte-for-byte with a tree built by hand
    Reference(fn() -> Value),
    /// must encode (compact) to exactly this text
    Text(&'static str),
}

struct Case {
    name: &'static str,
    generic: fn() -> Value,
    expect: Expect,
}

fn cleared_record() -> FlatRecord {
    let mut record = FlatRecord::default();
    record.clear_string();
    record
}

fn dict() -> IndexMap<String, String> {
    [("k1", "v1"), ("k2", "v2"), ("k3", "v3")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

static CASES: Lazy<Vec<Case>> = Lazy::new(|| {
    vec![
        Case {
            name: "null",
            generic: || to_tree(&None::<i64>),
            expect: Expect::Reference(populate_null),
        },
        Case {
            name: "string",
            generic: || to_tree("Hello World"),
            expect: Expect::Reference(|| populate_string("Hello World")),
        },
        Case {
            name: "bool true",
            generic: || to_tree(&true),
            expect: Expect::Text("true"),
        },
        Case {
            name: "bool false",
            generic: || to_tree(&false),
            expect: Expect::Reference(|| populate_bool(false)),
        },
        Case {
            name: "double",
            generic: || to_tree(&12.345f64),
            expect: Expect::Reference(|| populate_double(12.345)),
        },
        Case {
            name: "long",
            generic: || to_tree(&12345i64),
            expect: Expect::Reference(|| populate_long(12345)),
        },
        Case {
            name: "array",
            generic: || to_tree(&["l1", "l2", "l3"]),
            expect: Expect::Reference(|| populate_array(["l1", "l2", "l3"])),
        },
        Case {
            name: "empty array",
            generic: || to_tree(&Vec::<String>::new()),
            expect: Expect::Text("[]"),
        },
        Case {
            name: "dict",
            generic: || to_tree(&dict()),
            expect: Expect::Reference(|| populate_dict(&dict())),
        },
        Case {
            name: "record",
            generic: || to_tree(&FlatRecord::default()),
            expect: Expect::Reference(|| populate_struct(&FlatRecord::default())),
        },
        Case {
            name: "record without string",
            generic: || to_tree(&cleared_record()),
            expect: Expect::Text(r#"{"bool_member":false,"long_member":12345,"double_member":12.345}"#),
        },
        Case {
            name: "empty record",
            generic: || to_tree(&FlatRecord::empty()),
            expect: Expect::Reference(|| populate_struct(&FlatRecord::empty())),
        },
        Case {
            name: "nested",
            generic: || to_tree(&Outer::sample()),
            expect: Expect::Text(concat!(
                r#"{"string_value":"hello world","#,
                r#""def_value":{"long":12345,"string":"DEF","double":123.45,"boolean":true}}"#
            )),
        },
        Case {
            name: "empty inner",
            generic: || to_tree(&Inner::default()),
            expect: Expect::Text("{}"),
        },
    ]
});

fn compact(tree: &Value) -> Result<String, json_reflect::Error> {
    encode(tree, Format::Compact)
}

fn run_case(case: &Case) -> Result<(), String> {
    let tree = (case.generic)();
    let first = compact(&tree).map_err(|error| error.to_string())?;
    let second = compact(&(case.generic)()).map_err(|error| error.to_string())?;
    if first != second {
        return Err(format!("not idempotent:\n    {first}\n    {second}"));
    }
    let expected = match &case.expect {
        Expect::Reference(build) => compact(&build()).map_err(|error| error.to_string())?,
        Expect::Text(text) => text.to_string(),
    };
    if first != expected {
        return Err(format!("expected: {expected}\n    actual:   {first}"));
    }
    Ok(())
}

fn main() {
    let mut failed = 0usize;
    for case in CASES.iter() {
        match run_case(case) {
            Ok(()) => eprintln!("✅ {}", case.name),
            Err(message) => {
                failed += 1;
                eprintln!("❌ {}\n    {}", case.name.red(), message);
            }
        }
    }
    let total = CASES.len();
    if failed > 0 {
        eprintln!("{}", format!("{failed}/{total} cases failed").red().bold());
        std::process::exit(1);
    }
    eprintln!("{}", format!("all {total} cases passed").green().bold());
}
