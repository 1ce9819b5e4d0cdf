//! End-to-end card scenarios through the public API.

use chrono::{Duration, Local, NaiveDate};

use locker_barcode::{BarcodeCard, RenderContext, Symbology, png_bytes};
use locker_core::{Card, CardData, CardDate, CardError};

fn cvs() -> BarcodeCard {
    BarcodeCard::with_fields(Some("CVS"), Some("384038939120"), Some("EAN_13"))
}

#[test]
fn cvs_card_summarizes_and_renders() {
    locker_observability::init_with_filter("locker_barcode=debug");

    let card = cvs();

    let summary = card.to_string();
    let name = summary.find("Name:CVS").unwrap();
    let code = summary.find("Code:384038939120").unwrap();
    let kind = summary.find("Type:EAN_13").unwrap();
    assert!(name < code && code < kind);

    assert!(!card.date_is_expired());

    let img = card.encode(&RenderContext::default(), 200, 80).unwrap();
    assert_eq!(img.dimensions(), (200, 80));
    assert!(!png_bytes(&img).unwrap().is_empty());
}

#[test]
fn expiry_tracks_the_local_calendar() {
    let today = Local::now().date_naive();
    let mut card = cvs();

    card.data_mut().set_date(Some(&(today - Duration::days(1))));
    assert!(card.data().date_is_expired_at(&today));

    card.data_mut().set_date(Some(&today));
    assert!(!card.data().date_is_expired_at(&today));

    card.data_mut().set_date(Some(&(today + Duration::days(30))));
    assert!(!card.data().date_is_expired_at(&today));

    // Far enough from today that a midnight rollover cannot change the answer.
    card.data_mut().set_date(Some(&(today - Duration::days(30))));
    assert!(card.date_is_expired());

    card.data_mut().clear_date();
    assert_eq!(card.data().date(), None);
    assert!(!card.date_is_expired());
}

#[test]
fn every_symbology_renders_a_matching_card() {
    let ctx = RenderContext::from_lookup(|_| None);
    let cards = [
        ("Grocer", "400638133393", Symbology::Ean13),
        ("Kiosk", "9638507", Symbology::Ean8),
        ("Pharmacy", "03600029145", Symbology::UpcA),
        ("Library", "lib-00042", Symbology::Code39),
    ];

    for (name, code, symbology) in cards {
        let card = BarcodeCard::with_fields(Some(name), Some(code), Some(symbology.tag()));
        assert!(card.type_is_set() && card.code_is_set(), "{card}");

        let img = card.encode(&ctx, 400, 120).unwrap();
        assert_eq!(img.dimensions(), (400, 120), "{card}");
    }
}

#[test]
fn wider_targets_draw_wider_modules() {
    let ctx = RenderContext::default();
    let card = cvs();

    let dark = |w: u32| {
        let img = card.encode(&ctx, w, 10).unwrap();
        (0..w).filter(|&x| img.get_pixel(x, 5).0[0] == 0).count()
    };

    assert_eq!(dark(230), 2 * dark(115));
}

#[test]
fn cards_of_different_kinds_compare_by_fields() {
    struct Plain(CardData);

    impl Card for Plain {
        type Context = ();
        type Encoded = ();

        fn data(&self) -> &CardData {
            &self.0
        }
        fn data_mut(&mut self) -> &mut CardData {
            &mut self.0
        }
        fn name_is_set(&self) -> bool {
            self.0.name().is_some()
        }
        fn code_is_set(&self) -> bool {
            self.0.code().is_some()
        }
        fn type_is_set(&self) -> bool {
            self.0.card_type().is_some()
        }
        fn encode(&self, _: &(), _: u32, _: u32) -> Result<(), CardError> {
            Ok(())
        }
    }

    let barcode = cvs();
    let mut plain = Plain(barcode.data().clone());
    assert!(barcode.same_card(&plain));

    plain.data_mut().set_date_ymd(2031, 1, 31);
    assert!(!barcode.same_card(&plain));
    assert_eq!(plain.data().date(), Some(CardDate::new(2031, 1, 31)));
}

#[test]
fn defensive_copies_survive_mutation() {
    let mut card = cvs();
    let mut supplied = NaiveDate::from_ymd_opt(2030, 5, 20).unwrap();
    card.data_mut().set_date(Some(&supplied));

    supplied += Duration::days(400);
    let mut returned = card.data().date().unwrap();
    returned = CardDate::new(returned.year(), 12, 31);

    assert_ne!(CardDate::from(supplied), card.data().date().unwrap());
    assert_ne!(returned, card.data().date().unwrap());
    assert_eq!(card.data().date(), Some(CardDate::new(2030, 5, 20)));
}
