use workerchat_core::error::ChatError;
use workerchat_core::format::{
    escape_html, split_segments, CodeHighlighter, HighlightedCode, ResponseFormatter, Segment,
    TextRenderer,
};

// ========================================================================
// Formatter scenarios (format/mod.rs)
// ========================================================================

#[test]
fn test_plain_prose_renders_markdown_paragraph() {
    let html = ResponseFormatter::new().format("Hello");
    assert!(html.contains("<p>Hello</p>"));
}

#[test]
fn test_empty_input_renders_empty_output() {
    assert_eq!(ResponseFormatter::new().format(""), "");
}

#[test]
fn test_code_only_answer_renders_highlighted_block() {
    let html = ResponseFormatter::new().format("```python\nprint(1)\n```");
    assert!(html.contains("code-block"));
    assert!(html.contains("code-block-lang\">Python<"));
    assert!(html.contains("language-python"));
    assert!(html.contains("<span"));
    assert!(html.contains("print"));
    assert!(html.contains("copy-button"));
    // No prose markup for a code-only answer.
    assert!(!html.contains("<p>"));
}

#[test]
fn test_prose_code_prose_joined_in_order() {
    let html = ResponseFormatter::new().format("A\n```js\nx<1\n```\nB");
    let a = html.find("<p>A</p>").expect("prose A rendered");
    let code = html.find("language-js").expect("code block rendered");
    let b = html.find("<p>B</p>").expect("prose B rendered");
    assert!(a < code && code < b);
    assert!(html.contains("&lt;"));
    assert!(!html.contains("x<1"));
}

#[test]
fn test_plain_text_specials_never_survive_unescaped() {
    let html = ResponseFormatter::new().format("2 < 3 & 5 > 4");
    assert!(!html.contains("2 < 3"));
    assert!(html.contains("&lt;"));
    assert!(html.contains("&amp;"));
}

#[test]
fn test_code_body_escaped_exactly_once() {
    let html = ResponseFormatter::new().format("```\na && b\n```");
    assert!(html.contains("&amp;"));
    assert!(!html.contains("&amp;amp;"));
}

#[test]
fn test_unterminated_fence_fails_open_keeping_trailing_text() {
    let html = ResponseFormatter::new().format("hello\n```python\nprint(1)");
    // The trailing answer text must survive as prose, not vanish.
    assert!(html.contains("print(1)"));
    assert!(!html.contains("code-block-header"));
}

#[test]
fn test_invalid_language_tag_treated_as_unknown() {
    let html = ResponseFormatter::new().format("```c#!\nint x;\n```");
    assert!(html.contains("code-block"));
    assert!(html.contains("int x;"));
    assert!(!html.contains("c#!"));
}

#[test]
fn test_nested_backtick_like_lines_stay_in_body() {
    let html = ResponseFormatter::new().format("```md\nuse:\n```rust\n```\ntail");
    // The "```rust" line is body text of the outer block, not a new fence:
    // exactly one code block comes out, and the tail is ordinary prose.
    assert_eq!(html.matches("code-block-header").count(), 1);
    assert!(html.contains("<p>tail</p>"));
}

// ========================================================================
// Segment partition property (format/segment.rs)
// ========================================================================

#[test]
fn test_segments_reconstruct_raw_answer() {
    let cases = [
        "plain",
        "a\n```js\n1\n```\nb",
        "```\nonly code\n```",
        "unterminated\n```rust\nfn x() {}",
        "",
        "two\n```a\n1\n```\n```b\n2\n```\nblocks",
    ];
    for raw in cases {
        let rebuilt: String = split_segments(raw).iter().map(Segment::literal).collect();
        assert_eq!(rebuilt, raw, "partition lost text for {raw:?}");
    }
}

// ========================================================================
// Degradation (capability faults never escape format)
// ========================================================================

struct FailingRenderer;

impl TextRenderer for FailingRenderer {
    fn to_html(&self, _markdown: &str) -> Result<String, ChatError> {
        Err(ChatError::Render("renderer down".to_string()))
    }
}

struct FailingHighlighter;

impl CodeHighlighter for FailingHighlighter {
    fn highlight(
        &self,
        _code: &str,
        _language_hint: Option<&str>,
    ) -> Result<HighlightedCode, ChatError> {
        Err(ChatError::Render("highlighter down".to_string()))
    }
}

#[test]
fn test_faulted_segments_degrade_to_escaped_text() {
    let formatter = ResponseFormatter::with_capabilities(
        Box::new(FailingRenderer),
        Box::new(FailingHighlighter),
    );
    let html = formatter.format("a <b>\n```js\nx<1\n```");
    // Both segments still render, escaped exactly once.
    assert!(html.contains("a &lt;b&gt;"));
    assert!(html.contains("x&lt;1"));
    assert!(!html.contains("<b>"));
    assert!(!html.contains("&amp;lt;"));
}

#[test]
fn test_faulted_code_block_keeps_language_label() {
    let formatter = ResponseFormatter::with_capabilities(
        Box::new(FailingRenderer),
        Box::new(FailingHighlighter),
    );
    let html = formatter.format("```js\n1\n```");
    assert!(html.contains("code-block-lang\">js<"));
}

// ========================================================================
// escape_html
// ========================================================================

#[test]
fn test_escape_html_round_trips_through_entities() {
    assert_eq!(
        escape_html("<script>\"'&</script>"),
        "&lt;script&gt;&quot;&#39;&amp;&lt;/script&gt;"
    );
}
