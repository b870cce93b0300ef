// Standard library
use std::fmt;
use std::str::FromStr;

// 3rd party crates
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} code '{code}'")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: String,
}

/// Declares a closed enumeration together with its wire code table.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.code() == s)
                    .ok_or_else(|| UnknownCode {
                        kind: $kind,
                        code: s.to_string(),
                    })
            }
        }
    };
}

coded_enum! {
    /// How the marking codes of the document are going to be used.
    UsageType as "usage type" {
        SentToPrinter => "SENT_TO_PRINTER",
    }
}

coded_enum! {
    DocumentFormat as "document format" {
        Manual => "MANUAL",
    }
}

coded_enum! {
    /// Kind of goods turnover the document reports.
    DocumentType as "document type" {
        /// Goods produced locally; requires a `produced` section.
        IntroduceGoods => "LP_INTRODUCE_GOODS_AUTO",
        /// Imported goods; requires an `import` section.
        GoodsImport => "LP_GOODS_IMPORT_AUTO",
    }
}

coded_enum! {
    /// Conformity document attached to a product.
    CertificateDocument as "certificate document" {
        Certificate => "1",
        Declaration => "2",
    }
}

coded_enum! {
    ProductionType as "production type" {
        OwnProduction => "OWN_PRODUCTION",
    }
}
