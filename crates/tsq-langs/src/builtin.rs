use std::fmt;

use crate::tree_sitter::Language;

macro_rules! define_langs {
    (
        $(
            $variant:ident => {
                feature: $feature:literal,
                name: $name:literal,
                ts_lang: $ts_lang:expr,
                editor_ids: [$($alias:literal),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        /// Closed set of languages a query can target.
        ///
        /// Every variant exists regardless of cargo features; whether its
        /// grammar is linked in is reported by [`LanguageId::is_built_in`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum LanguageId {
            $($variant,)*
        }

        impl LanguageId {
            pub const ALL: &'static [LanguageId] = &[$(LanguageId::$variant,)*];

            /// Canonical lowercase name.
            pub fn name(self) -> &'static str {
                match self {
                    $(LanguageId::$variant => $name,)*
                }
            }

            /// Exact canonical name, case-insensitive.
            pub fn from_name(s: &str) -> Option<Self> {
                match s.to_ascii_lowercase().as_str() {
                    $($name => Some(LanguageId::$variant),)*
                    _ => None,
                }
            }

            /// Normalizes an editor language id (`typescriptreact`, `c#`, ...).
            pub fn from_editor_id(s: &str) -> Option<Self> {
                match s.to_ascii_lowercase().as_str() {
                    $($name $(| $alias)* => Some(LanguageId::$variant),)*
                    _ => None,
                }
            }

            pub fn is_built_in(self) -> bool {
                match self {
                    $(
                        #[cfg(feature = $feature)]
                        LanguageId::$variant => true,
                    )*
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            pub(crate) fn ts_language(self) -> Option<Language> {
                match self {
                    $(
                        #[cfg(feature = $feature)]
                        LanguageId::$variant => {
                            let language: Language = $ts_lang.into();
                            Some(language)
                        }
                    )*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    };
}

define_langs! {
    Python => {
        feature: "lang-python",
        name: "python",
        ts_lang: arborium_python::language(),
        editor_ids: ["py"],
    },
    JavaScript => {
        feature: "lang-javascript",
        name: "javascript",
        ts_lang: arborium_javascript::language(),
        editor_ids: ["javascriptreact", "js", "jsx"],
    },
    TypeScript => {
        feature: "lang-typescript",
        name: "typescript",
        ts_lang: arborium_typescript::language(),
        editor_ids: ["ts"],
    },
    Tsx => {
        feature: "lang-tsx",
        name: "tsx",
        ts_lang: arborium_tsx::language(),
        editor_ids: ["typescriptreact"],
    },
    Go => {
        feature: "lang-go",
        name: "go",
        ts_lang: arborium_go::language(),
        editor_ids: ["golang"],
    },
    Ruby => {
        feature: "lang-ruby",
        name: "ruby",
        ts_lang: arborium_ruby::language(),
        editor_ids: ["rb"],
    },
    CSharp => {
        feature: "lang-c-sharp",
        name: "csharp",
        ts_lang: arborium_c_sharp::language(),
        editor_ids: ["c#", "c_sharp", "cs"],
    },
    Cpp => {
        feature: "lang-cpp",
        name: "cpp",
        ts_lang: arborium_cpp::language(),
        editor_ids: ["c++"],
    },
    Java => {
        feature: "lang-java",
        name: "java",
        ts_lang: arborium_java::language(),
        editor_ids: [],
    },
    Rust => {
        feature: "lang-rust",
        name: "rust",
        ts_lang: arborium_rust::language(),
        editor_ids: ["rs"],
    },
    Php => {
        feature: "lang-php",
        name: "php",
        ts_lang: arborium_php::language(),
        editor_ids: [],
    },
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All variants whose grammar is linked in.
pub fn built_in() -> Vec<LanguageId> {
    LanguageId::ALL
        .iter()
        .copied()
        .filter(|id| id.is_built_in())
        .collect()
}
