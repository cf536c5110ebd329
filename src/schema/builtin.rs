//! Built-in schemas, embedded at compile time.

/// (file name, JSON) pairs in classification priority order.
pub(crate) const BUILTIN_SCHEMAS: [(&str, &str); 4] = [
    (
        "form_106sum.json",
        include_str!("../../schemas/form_106sum.json"),
    ),
    (
        "form_106ab.json",
        include_str!("../../schemas/form_106ab.json"),
    ),
    ("form_106d.json", include_str!("../../schemas/form_106d.json")),
    (
        "form_106ef.json",
        include_str!("../../schemas/form_106ef.json"),
    ),
];
