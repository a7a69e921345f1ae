use hometown_core::content::HOMETOWN_STORY;

#[test]
fn test_story_headings() {
    let headings: Vec<&str> = HOMETOWN_STORY.headings().collect();
    assert_eq!(
        headings,
        vec![
            "Explore our range of home furniture online",
            "Kitchen Furniture",
            "Living Room Furniture",
            "Dining Room Furniture",
            "Bedroom Furniture",
            "Office Furniture",
        ]
    );
}

#[test]
fn test_story_paragraph_counts() {
    assert_eq!(HOMETOWN_STORY.intro.len(), 3);
    let counts: Vec<usize> = HOMETOWN_STORY
        .sections
        .iter()
        .map(|s| s.paragraphs.len())
        .collect();
    assert_eq!(counts, vec![2, 2, 1, 1, 1]);
}

#[test]
fn test_plain_text_layout() {
    let text = HOMETOWN_STORY.plain_text();
    assert!(text.starts_with(
        "HomeTown, one of the best online furniture & home décor stores in India\n\n"
    ));
    assert!(text.contains("Office Furniture\n\nWork from home"));
    assert!(text.ends_with("productive and comfortable."));
    // Line continuations collapse to single spaces
    assert!(!text.contains("  "));
}
