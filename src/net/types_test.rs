use super::*;

// =============================================================
// Profile defaults
// =============================================================

#[test]
fn empty_object_parses_to_default_profile() {
    let profile: Profile = serde_json::from_str("{}").unwrap();
    assert_eq!(profile, Profile::default());
}

#[test]
fn unknown_fields_are_ignored() {
    let profile: Profile = serde_json::from_value(serde_json::json!({
        "name": "Sara",
        "avatar": "me.png",
        "meta": { "version": 3 }
    }))
    .unwrap();
    assert_eq!(profile.name.as_deref(), Some("Sara"));
}

#[test]
fn full_document_parses() {
    let profile: Profile = serde_json::from_value(serde_json::json!({
        "name": "Sara Haddad",
        "title": "Backend Engineer",
        "location": "Amman, Jordan",
        "summary": "Builds **reliable** services.",
        "contacts": [
            { "label": "Email", "value": "sara@example.com" },
            { "label": "GitHub", "value": "sarah", "url": "https://github.com/sarah" }
        ],
        "skills": ["Rust", "PostgreSQL"],
        "languages": ["Arabic", { "name": "English", "level": "C1" }],
        "experience": [{
            "role": "Engineer",
            "company": "Acme",
            "period": "2021 – present",
            "highlights": ["Shipped billing"]
        }],
        "projects": [{ "name": "cvgen", "link": "https://example.com/cvgen", "tech": ["Rust"] }],
        "education": [{ "degree": "BSc CS", "school": "JUST", "period": "2014 – 2018" }],
        "interests": ["Chess"]
    }))
    .unwrap();

    assert_eq!(profile.contacts.len(), 2);
    assert_eq!(profile.contacts[1].url.as_deref(), Some("https://github.com/sarah"));
    assert_eq!(profile.experience[0].highlights, vec!["Shipped billing".to_owned()]);
    assert_eq!(profile.experience[0].location, None);
    assert_eq!(profile.projects[0].description, None);
    assert_eq!(profile.education[0].school, "JUST");
    assert_eq!(profile.interests, vec!["Chess".to_owned()]);
}

// =============================================================
// Language
// =============================================================

#[test]
fn language_accepts_bare_string() {
    let lang: Language = serde_json::from_str("\"Arabic\"").unwrap();
    assert_eq!(lang.name(), "Arabic");
    assert_eq!(lang.level(), None);
}

#[test]
fn language_accepts_object_with_level() {
    let lang: Language = serde_json::from_value(serde_json::json!({ "name": "English", "level": "C1" })).unwrap();
    assert_eq!(lang.name(), "English");
    assert_eq!(lang.level(), Some("C1"));
}

#[test]
fn language_object_without_level() {
    let lang: Language = serde_json::from_value(serde_json::json!({ "name": "French" })).unwrap();
    assert_eq!(lang.name(), "French");
    assert_eq!(lang.level(), None);
}

// =============================================================
// Null tolerance
// =============================================================

#[test]
fn null_list_fields_parse_as_empty() {
    let profile: Profile = serde_json::from_value(serde_json::json!({
        "name": "Sara",
        "skills": null,
        "contacts": null,
        "experience": null,
        "interests": null
    }))
    .unwrap();
    assert_eq!(profile.name.as_deref(), Some("Sara"));
    assert!(profile.skills.is_empty());
    assert!(profile.contacts.is_empty());
    assert!(profile.experience.is_empty());
    assert!(profile.interests.is_empty());
}

#[test]
fn null_fields_inside_entries_parse_as_empty() {
    let profile: Profile = serde_json::from_value(serde_json::json!({
        "experience": [{ "role": "Engineer", "company": null, "highlights": null }],
        "projects": [{ "name": "cvgen", "tech": null }],
        "education": [{ "degree": null, "school": "JUST" }],
        "contacts": [{ "label": null, "value": "a@b.io" }]
    }))
    .unwrap();
    assert_eq!(profile.experience[0].company, "");
    assert!(profile.experience[0].highlights.is_empty());
    assert!(profile.projects[0].tech.is_empty());
    assert_eq!(profile.education[0].degree, "");
    assert_eq!(profile.contacts[0].label, "");
    assert_eq!(profile.contacts[0].value, "a@b.io");
}

#[test]
fn language_object_without_name_parses() {
    let profile: Profile = serde_json::from_value(serde_json::json!({
        "languages": [{ "level": "C1" }, "Arabic"]
    }))
    .unwrap();
    assert_eq!(profile.languages.len(), 2);
    assert_eq!(profile.languages[0].name(), "");
    assert_eq!(profile.languages[0].level(), Some("C1"));
    assert_eq!(profile.languages[1].name(), "Arabic");
}
