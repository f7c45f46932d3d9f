// Pitch-class set helpers: behaviour the set analysis views rely on

use pcset_wasm::models::{DisplayPreference, FormatSettings, PitchClass, SetFormat};
use pcset_wasm::{
    format_set_to_string, is_black_key, key_color, midi_note, to_formatted_prime_form_array,
    to_midi_note, transpose, KeyColor, PcSetError,
};

const RECORD: &str = r#"["0","1","4"]|3-1A|<1,0,0,0,1,0>"#;

#[test]
fn test_prime_form_display() {
    let out = format_set_to_string(RECORD, SetFormat::Prime, true, &DisplayPreference::default())
        .expect("prime format should succeed");
    assert_eq!(out, "{0,1,4}");
}

#[test]
fn test_interval_vector_display() {
    let out = format_set_to_string(RECORD, SetFormat::Vec, true, &DisplayPreference::default())
        .expect("vec format should succeed");
    assert_eq!(out, "<1,0,0,0,1,0>");
}

#[test]
fn test_forte_label_follows_display_preference() {
    let original = DisplayPreference::new(Some("original".to_string()));

    let hidden = format_set_to_string(RECORD, SetFormat::Forte, true, &original).unwrap();
    assert_eq!(hidden, "3-1", "Inversion marker should be hidden for original labels");

    let kept = format_set_to_string(RECORD, SetFormat::Forte, true, &DisplayPreference::default())
        .unwrap();
    assert_eq!(kept, "3-1A", "Inversion marker should stay without the preference");
}

#[test]
fn test_settings_drive_formatting() {
    let settings: FormatSettings =
        serde_json::from_str(r#"{"format":"forte","displayPreference":"original"}"#).unwrap();

    let out = format_set_to_string(
        RECORD,
        settings.format,
        settings.remove_inversion,
        &settings.display_preference,
    )
    .unwrap();
    assert_eq!(out, "3-1");
}

#[test]
fn test_bare_prime_form_has_no_forte_label() {
    let err = format_set_to_string(
        r#"["0","2","7"]"#,
        SetFormat::Forte,
        true,
        &DisplayPreference::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PcSetError::MalformedRecord { segment: "forte", .. }));
}

#[test]
fn test_prime_form_array() {
    let pcs = to_formatted_prime_form_array(r#"["0","T","E"]|3-1|<2,1,0,0,0,0>"#).unwrap();
    assert_eq!(pcs, vec![0, 10, 11]);
}

#[test]
fn test_midi_notes() {
    assert_eq!(to_midi_note("0", 5).unwrap(), "60");
    assert_eq!(to_midi_note("11", 10).unwrap(), "119");
    assert_eq!(midi_note("4", 5).unwrap().to_u7().unwrap().as_int(), 64);
}

#[test]
fn test_keyboard_octave_is_periodic() {
    for n in -36..36 {
        assert_eq!(is_black_key(n), is_black_key(n + 12));
        assert_eq!(key_color(n), key_color(n - 12));
    }
    assert_eq!(key_color(1), KeyColor::Black);
}

#[test]
fn test_transpose_round_trip() {
    assert_eq!(transpose("11", 2).unwrap(), "1");
    for pc in 0..12 {
        let text = PitchClass::wrapping(pc).to_string();
        assert_eq!(transpose(&text, 12).unwrap(), text);
    }
}

#[test]
fn test_transpose_prime_form_members() {
    let transposed: Vec<String> = to_formatted_prime_form_array(RECORD)
        .unwrap()
        .iter()
        .map(|pc| transpose(&pc.to_string(), 9).unwrap())
        .collect();
    assert_eq!(transposed, vec!["9", "10", "1"]);
}
