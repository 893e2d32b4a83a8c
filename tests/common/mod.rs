//! Shared test constants and helpers for integration tests.

/// A small but representative bibliography: a journal article, a
/// conference paper, an edited book, and a year-less entry of unknown
/// type.
pub const SAMPLE_BIB: &str = r#"
@article{smith20,
    author = {John Smith and Max Müller},
    title = {A {Study} of Things},
    journal = {Journal of Stuff},
    volume = {3},
    pages = {1-10},
    year = {2020},
    doi = {10.1234/js.100},
    abstract = {We study
        things, at length.},
}
@inproceedings{doe19,
    author = {Jane Doe},
    title = {Conference Findings},
    booktitle = {Proceedings of Findings},
    publisher = {ACM},
    address = {New York},
    pages = {5-9},
    year = {2019},
}
@book{editors21,
    editor = {Carol Chen and Dan Diaz},
    title = {A Collected Volume},
    publisher = {Springer},
    year = {2021},
}
@misc{undated,
    author = {Eve Early},
    title = {An Undated Note},
}
"#;

/// The page filenames SAMPLE_BIB converts to, in load order.
pub const SAMPLE_PAGES: &[&str] = &[
    "2020-01-01_smith20.md",
    "2019-01-01_doe19.md",
    "2021-01-01_editors21.md",
    "2999-01-01_undated.md",
];

/// Build a single BibTeX entry from a key, type, and field list.
pub fn build_entry(entry_type: &str, key: &str, fields: &[(&str, &str)]) -> String {
    let mut entry = format!("@{}{{{},\n", entry_type, key);
    for (name, value) in fields {
        entry.push_str(&format!("    {} = {{{}}},\n", name, value));
    }
    entry.push_str("}\n");
    entry
}
