//! Initial content inserted into an empty store.
//!
//! Rows are inserted parent-first and linked by the ids SQLite hands back,
//! then the cached counts are derived from what was actually inserted.

use duas_core::types::DbId;
use sqlx::SqlitePool;

use crate::repositories::CountRepo;

struct SeedCategory {
    name: &'static str,
    icon: &'static str,
    subcategories: &'static [SeedSubcategory],
}

struct SeedSubcategory {
    name: &'static str,
    duas: &'static [SeedDua],
}

struct SeedDua {
    name: &'static str,
    arabic: &'static str,
    transliteration: &'static str,
    translation: &'static str,
    reference: &'static str,
}

const SEED: &[SeedCategory] = &[
    SeedCategory {
        name: "Dua's Importance",
        icon: "📿",
        subcategories: &[],
    },
    SeedCategory {
        name: "All Dua's",
        icon: "📖",
        subcategories: &[
            SeedSubcategory {
                name: "The servant is dependent on his Lord",
                duas: &[
                    SeedDua {
                        name: "The Servant's Dependency on Allah",
                        arabic: "يَا أَيُّهَا النَّاسُ أَنتُمُ الْفُقَرَاءُ إِلَى اللَّهِ ۖ وَاللَّهُ هُوَ الْغَنِيُّ الْحَمِيدُ",
                        transliteration: "Ya ayyuha an-nasu antumu al-fuqara'u ila Allahi wa Allahu huwa al-ghaniyyu al-hamid",
                        translation: "O mankind, you are those in need of Allah, while Allah is the Free of need, the Praiseworthy.",
                        reference: "Quran 35:15",
                    },
                    SeedDua {
                        name: "Seeking Help from Allah",
                        arabic: "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
                        transliteration: "Iyyaka na'budu wa iyyaka nasta'in",
                        translation: "It is You we worship and You we ask for help.",
                        reference: "Quran 1:5",
                    },
                ],
            },
            SeedSubcategory {
                name: "Conditions for Dua to be successful",
                duas: &[
                    SeedDua {
                        name: "Sincerity in Dua",
                        arabic: "فَادْعُوا اللَّهَ مُخْلِصِينَ لَهُ الدِّينَ",
                        transliteration: "Fad'u Allaha mukhlisina lahu ad-din",
                        translation: "So invoke Allah, being sincere to Him in religion.",
                        reference: "Quran 40:14",
                    },
                    SeedDua {
                        name: "Calling Upon Allah with His Beautiful Names",
                        arabic: "وَلِلَّهِ الْأَسْمَاءُ الْحُسْنَىٰ فَادْعُوهُ بِهَا",
                        transliteration: "Wa lillahi al-asma'u al-husna fad'uhu biha",
                        translation: "And to Allah belong the best names, so invoke Him by them.",
                        reference: "Quran 7:180",
                    },
                ],
            },
            SeedSubcategory {
                name: "When a dua is accepted",
                duas: &[],
            },
        ],
    },
    SeedCategory {
        name: "Memorize & Learn",
        icon: "🧠",
        subcategories: &[],
    },
    SeedCategory {
        name: "Dua of the Day",
        icon: "⭐",
        subcategories: &[],
    },
    SeedCategory {
        name: "Ruqyah",
        icon: "🕌",
        subcategories: &[
            SeedSubcategory {
                name: "Protection from Evil Eye",
                duas: &[
                    SeedDua {
                        name: "Seeking Protection from Evil Eye",
                        arabic: "أَعُوذُ بِكَلِمَاتِ اللَّهِ التَّامَّاتِ مِنْ شَرِّ مَا خَلَقَ",
                        transliteration: "A'udhu bi kalimatillahi at-tammati min sharri ma khalaq",
                        translation: "I seek refuge in the perfect words of Allah from the evil of what He has created.",
                        reference: "Sahih Muslim",
                    },
                    SeedDua {
                        name: "Protection with Ayatul Kursi",
                        arabic: "اللَّهُ لَا إِلَٰهَ إِلَّا هُوَ الْحَيُّ الْقَيُّومُ",
                        transliteration: "Allahu la ilaha illa huwa al-hayyu al-qayyum",
                        translation: "Allah - there is no deity except Him, the Ever-Living, the Sustainer of existence.",
                        reference: "Quran 2:255",
                    },
                ],
            },
            SeedSubcategory {
                name: "Protection from Jinn",
                duas: &[],
            },
            SeedSubcategory {
                name: "Healing Ruqyah",
                duas: &[SeedDua {
                    name: "General Healing Dua",
                    arabic: "اللَّهُمَّ رَبَّ النَّاسِ أَذْهِبِ الْبَأْسَ اشْفِ أَنْتَ الشَّافِي",
                    transliteration: "Allahumma rabba an-nasi adhhib al-ba'sa ishfi anta ash-shafi",
                    translation: "O Allah, Lord of mankind, remove the harm and heal, You are the Healer.",
                    reference: "Sahih Bukhari",
                }],
            },
        ],
    },
    SeedCategory {
        name: "Morning Azkar",
        icon: "🌅",
        subcategories: &[],
    },
    SeedCategory {
        name: "Evening Azkar",
        icon: "🌙",
        subcategories: &[],
    },
    SeedCategory {
        name: "Sleep & Wake Up",
        icon: "😴",
        subcategories: &[],
    },
];

/// Rows inserted by [`seed_if_empty`]. All zero when the store already had
/// content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub categories: u64,
    pub subcategories: u64,
    pub duas: u64,
}

impl SeedOutcome {
    /// Whether anything was inserted.
    pub fn seeded(&self) -> bool {
        self.categories > 0
    }
}

/// Insert the built-in content when the `categories` table is empty.
///
/// Runs in one transaction; on a populated store it changes nothing, so it is
/// safe to call on every startup.
///
/// The transaction takes the write lock before the emptiness check, so a
/// second starter on the same file waits out the busy timeout and then sees
/// the seeded rows instead of failing the lock upgrade.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<SeedOutcome, sqlx::Error> {
    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tx.rollback().await?;
        tracing::debug!(existing, "Store already has content, skipping seed");
        return Ok(SeedOutcome::default());
    }

    let mut outcome = SeedOutcome::default();

    for category in SEED {
        let category_id: DbId = sqlx::query_scalar(
            "INSERT INTO categories (name, icon, dua_count) VALUES ($1, $2, 0) RETURNING id",
        )
        .bind(category.name)
        .bind(category.icon)
        .fetch_one(&mut *tx)
        .await?;
        outcome.categories += 1;

        for subcategory in category.subcategories {
            let subcategory_id: DbId = sqlx::query_scalar(
                "INSERT INTO subcategories (category_id, name, dua_count)
                 VALUES ($1, $2, 0)
                 RETURNING id",
            )
            .bind(category_id)
            .bind(subcategory.name)
            .fetch_one(&mut *tx)
            .await?;
            outcome.subcategories += 1;

            for dua in subcategory.duas {
                sqlx::query(
                    "INSERT INTO duas
                        (subcategory_id, name, context, arabic, transliteration, translation, reference)
                     VALUES ($1, $2, '', $3, $4, $5, $6)",
                )
                .bind(subcategory_id)
                .bind(dua.name)
                .bind(dua.arabic)
                .bind(dua.transliteration)
                .bind(dua.translation)
                .bind(dua.reference)
                .execute(&mut *tx)
                .await?;
                outcome.duas += 1;
            }
        }
    }

    CountRepo::reconcile_on(&mut *tx).await?;
    tx.commit().await?;
    Ok(outcome)
}
