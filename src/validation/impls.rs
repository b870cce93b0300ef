// 3rd party crates
use chrono::{Local, Months, NaiveDate};

// Project imports
use crate::models::{Document, DocumentType, Import, Produced, Product, ProductionType};

// Current module imports
use super::constants::{INN_LENGTHS, MAX_DOCUMENT_AGE_YEARS, TNVED_CODE_LENGTH};
use super::traits::DocumentValidator;
use super::types::Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Validates the document against the current local date.
    pub fn validate(&self, document: &Document) -> bool {
        self.validate_on(document, Local::now().date_naive())
    }

    /// Validates the document using `today` as the reference date.
    pub fn validate_on(&self, document: &Document, today: NaiveDate) -> bool {
        // Enumerated tags are closed types, so presence means membership.
        let Some(doc_type) = document.doc_type else {
            return false;
        };
        if document.usage_type.is_none() || document.document_format.is_none() {
            return false;
        }

        if !inn_is_valid(document.participant_inn.as_deref()) {
            return false;
        }

        if !date_is_valid(document.production_date, today) {
            return false;
        }

        if !document
            .products
            .iter()
            .all(|product| product_is_valid(product, today))
        {
            return false;
        }

        match doc_type {
            DocumentType::IntroduceGoods => {
                document.import.is_none() && produced_is_valid(document.produced.as_ref())
            }
            DocumentType::GoodsImport => {
                document.produced.is_none() && import_is_valid(document.import.as_ref(), today)
            }
        }
    }
}

impl DocumentValidator for Validator {
    fn is_valid(&self, document: &Document) -> bool {
        self.validate(document)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn inn_is_valid(inn: Option<&str>) -> bool {
    match inn {
        Some(inn) => {
            INN_LENGTHS.contains(&inn.len())
                && !is_blank(inn)
                && inn.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Strictly after `today - MAX_DOCUMENT_AGE_YEARS` and strictly before `today`.
fn date_is_valid(date: Option<NaiveDate>, today: NaiveDate) -> bool {
    let Some(date) = date else {
        return false;
    };
    let Some(oldest) = today.checked_sub_months(Months::new(12 * MAX_DOCUMENT_AGE_YEARS)) else {
        return false;
    };
    date > oldest && date < today
}

fn product_is_valid(product: &Product, today: NaiveDate) -> bool {
    let tnved_is_valid = product
        .tnved_code
        .as_deref()
        .is_some_and(|code| code.chars().count() == TNVED_CODE_LENGTH && !is_blank(code));

    let code_is_valid = product.code.as_deref().is_some_and(|code| !is_blank(code));

    // Certificate codes are a closed enum; only the date needs checking.
    let certificate_date_is_valid = product
        .certificate_document_date
        .map_or(true, |date| date_is_valid(Some(date), today));

    tnved_is_valid && code_is_valid && certificate_date_is_valid
}

fn produced_is_valid(produced: Option<&Produced>) -> bool {
    produced.is_some_and(|produced| {
        produced.production_type == Some(ProductionType::OwnProduction)
            && inn_is_valid(produced.owner_inn.as_deref())
            && inn_is_valid(produced.producer_inn.as_deref())
    })
}

fn import_is_valid(import: Option<&Import>, today: NaiveDate) -> bool {
    import.is_some_and(|import| {
        import.decision_code > 0
            && import.customs_code.as_deref().is_some_and(|c| !is_blank(c))
            && import
                .declaration_number
                .as_deref()
                .is_some_and(|n| !is_blank(n))
            && date_is_valid(import.declaration_date, today)
    })
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;
    use crate::models::{CertificateDocument, DocumentFormat, UsageType};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn yesterday() -> NaiveDate {
        today() - Days::new(1)
    }

    fn product() -> Product {
        Product {
            code: Some("04601234567893".into()),
            tnved_code: Some("6401100000".into()),
            ..Default::default()
        }
    }

    fn introduce_document() -> Document {
        Document {
            usage_type: Some(UsageType::SentToPrinter),
            document_format: Some(DocumentFormat::Manual),
            doc_type: Some(DocumentType::IntroduceGoods),
            participant_inn: Some("7701234567".into()),
            production_date: Some(yesterday()),
            products: vec![product()],
            produced: Some(Produced {
                producer_inn: Some("7701234567".into()),
                owner_inn: Some("770123456789".into()),
                production_type: Some(ProductionType::OwnProduction),
            }),
            import: None,
        }
    }

    fn import_section() -> Import {
        Import {
            declaration_date: Some(yesterday()),
            declaration_number: Some("10702070/181026/0001234".into()),
            customs_code: Some("10702070".into()),
            decision_code: 10,
        }
    }

    fn import_document() -> Document {
        Document {
            doc_type: Some(DocumentType::GoodsImport),
            produced: None,
            import: Some(import_section()),
            ..introduce_document()
        }
    }

    fn check(document: &Document) -> bool {
        Validator::new().validate_on(document, today())
    }

    #[test]
    fn accepts_complete_introduction() {
        assert!(check(&introduce_document()));
    }

    #[test]
    fn accepts_complete_import() {
        assert!(check(&import_document()));
    }

    #[test]
    fn introduction_with_import_section_is_rejected() {
        let document = Document {
            import: Some(import_section()),
            ..introduce_document()
        };
        assert!(!check(&document));
    }

    #[test]
    fn import_with_produced_section_is_rejected() {
        let document = Document {
            produced: introduce_document().produced,
            ..import_document()
        };
        assert!(!check(&document));
    }

    #[test]
    fn short_tnved_code_is_rejected() {
        let mut document = introduce_document();
        document.products[0].tnved_code = Some("640110000".into());
        assert!(!check(&document));

        document.products[0].tnved_code = Some("          ".into());
        assert!(!check(&document));
    }

    #[test]
    fn every_product_is_checked() {
        let mut document = introduce_document();
        document.products.push(Product {
            code: Some("   ".into()),
            ..product()
        });
        assert!(!check(&document));
    }

    #[test]
    fn empty_product_list_is_accepted() {
        let document = Document {
            products: Vec::new(),
            ..introduce_document()
        };
        assert!(check(&document));
    }

    #[test]
    fn participant_inn_must_be_ten_or_twelve_digits() {
        for inn in ["77012345678", "770123456", "77012345ab", ""] {
            let document = Document {
                participant_inn: Some(inn.into()),
                ..introduce_document()
            };
            assert!(!check(&document), "inn {inn:?} should be rejected");
        }

        let document = Document {
            participant_inn: Some("770123456789".into()),
            ..introduce_document()
        };
        assert!(check(&document));
    }

    #[test]
    fn production_date_window_is_exclusive() {
        let today_doc = Document {
            production_date: Some(today()),
            ..introduce_document()
        };
        assert!(!check(&today_doc));

        let five_years_ago = Document {
            production_date: NaiveDate::from_ymd_opt(2021, 10, 19),
            ..introduce_document()
        };
        assert!(!check(&five_years_ago));

        let just_inside = Document {
            production_date: NaiveDate::from_ymd_opt(2021, 10, 20),
            ..introduce_document()
        };
        assert!(check(&just_inside));

        let missing = Document {
            production_date: None,
            ..introduce_document()
        };
        assert!(!check(&missing));
    }

    #[test]
    fn certificate_date_is_checked_only_when_present() {
        let mut document = introduce_document();
        document.products[0].certificate_document = Some(CertificateDocument::Declaration);
        document.products[0].certificate_document_date = Some(yesterday());
        assert!(check(&document));

        document.products[0].certificate_document_date = Some(today() + Days::new(3));
        assert!(!check(&document));
    }

    #[test]
    fn missing_enumerated_tags_are_rejected() {
        let no_type = Document {
            doc_type: None,
            ..introduce_document()
        };
        let no_usage = Document {
            usage_type: None,
            ..introduce_document()
        };
        let no_format = Document {
            document_format: None,
            ..introduce_document()
        };
        assert!(!check(&no_type));
        assert!(!check(&no_usage));
        assert!(!check(&no_format));
    }

    #[test]
    fn produced_section_rules() {
        let missing = Document {
            produced: None,
            ..introduce_document()
        };
        assert!(!check(&missing));

        let mut bad_owner = introduce_document();
        if let Some(produced) = bad_owner.produced.as_mut() {
            produced.owner_inn = Some("12345".into());
        }
        assert!(!check(&bad_owner));

        let mut no_type = introduce_document();
        if let Some(produced) = no_type.produced.as_mut() {
            produced.production_type = None;
        }
        assert!(!check(&no_type));
    }

    #[test]
    fn import_section_rules() {
        let zero_decision = Document {
            import: Some(Import {
                decision_code: 0,
                ..import_section()
            }),
            ..import_document()
        };
        assert!(!check(&zero_decision));

        let blank_customs = Document {
            import: Some(Import {
                customs_code: Some(" ".into()),
                ..import_section()
            }),
            ..import_document()
        };
        assert!(!check(&blank_customs));

        let old_declaration = Document {
            import: Some(Import {
                declaration_date: NaiveDate::from_ymd_opt(2019, 1, 1),
                ..import_section()
            }),
            ..import_document()
        };
        assert!(!check(&old_declaration));

        let missing = Document {
            import: None,
            ..import_document()
        };
        assert!(!check(&missing));
    }
}
