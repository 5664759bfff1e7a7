//! Behavioral properties of the line rewriter
use md_reformat::rewriter::{Edit, RewriteRules, rewrite_document};

const MIXED_DOCUMENT: &str = "# Title

##### **Code**

```python
print(\"hi\")
```

##### **Output**

```
hi
```

Some prose.
##### **Output**
```
##### **Code**
```
";

#[test]
fn test_end_to_end_example() {
    let input = "##### **Output**\n\n```\nhello\n```\n";
    let result = rewrite_document(input, &RewriteRules::default());

    assert_eq!(result.content, "```output\nhello\n```\n");
    assert!(result.changed());
    assert!(result.differs_from(input));
}

#[test]
fn test_mixed_document() {
    let result = rewrite_document(MIXED_DOCUMENT, &RewriteRules::default());

    let expected = "# Title

```python
print(\"hi\")
```

```output
hi
```

Some prose.
```output
##### **Code**
```
";
    assert_eq!(result.content, expected);

    let lines: Vec<usize> = result.edits.iter().map(Edit::line).collect();
    assert_eq!(lines, vec![3, 9, 11, 16, 17]);
}

#[test]
fn test_idempotence() {
    let rules = RewriteRules::default();
    let inputs = [
        MIXED_DOCUMENT,
        "##### **Output**\n\n\n\n```\nx\n```\n",
        "```\nunterminated\n##### **Code**\n",
        "##### **Code**\r\n\r\n```\r\nwin\r\n```\r\n",
        "plain text only",
    ];

    for input in inputs {
        let once = rewrite_document(input, &rules);
        let twice = rewrite_document(&once.content, &rules);
        assert_eq!(twice.content, once.content, "input: {:?}", input);
        assert!(!twice.changed(), "second pass changed {:?}", input);
    }
}

#[test]
fn test_no_op_document_reports_unchanged() {
    let input = "# Notes\n\n```rust\nfn main() {}\n```\n";
    let result = rewrite_document(input, &RewriteRules::default());

    assert!(!result.changed());
    assert!(!result.differs_from(input));
    assert!(result.edits.is_empty());
}

#[test]
fn test_header_at_end_of_file() {
    let rules = RewriteRules::default();

    let result = rewrite_document("##### **Output**", &rules);
    assert_eq!(result.content, "");

    let result = rewrite_document("text\n##### **Code**\n", &rules);
    assert_eq!(result.content, "text\n");
}

#[test]
fn test_closing_fence_never_altered() {
    let input = "```\na\n```\n```\nb\n```\n";
    let result = rewrite_document(input, &RewriteRules::default());

    assert_eq!(result.content, "```output\na\n```\n```output\nb\n```\n");
    assert_eq!(result.edits.len(), 2);
}
