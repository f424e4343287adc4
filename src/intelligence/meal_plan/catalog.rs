// ABOUTME: Curated meal options used by the offline fallback meal-plan synthesizer
// ABOUTME: Static per-slot tables with allergens, dietary tags, cuisine, and a safe vegan entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::MealSlot;

/// A curated meal the fallback synthesizer can place in a slot
///
/// Ingredients are written in English so the restriction keyword rules
/// apply to them; names and preparation steps use the app's locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealOption {
    /// Dish name
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Ingredients in display order
    pub ingredients: &'static [&'static str],
    /// Preparation steps
    pub instructions: &'static [&'static str],
    /// Allergen classes present (dairy, egg, gluten, nuts, fish, sesame, soy)
    pub allergens: &'static [&'static str],
    /// Dietary tags (vegan, vegetarian, high_protein, gluten_free, ...)
    pub dietary_tags: &'static [&'static str],
    /// Cuisine
    pub cuisine: &'static str,
}

impl MealOption {
    /// Whether the option carries a dietary tag (case-insensitive)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.dietary_tags
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(tag))
    }

    /// Whether the option carries an allergen class (case-insensitive)
    #[must_use]
    pub fn has_allergen(&self, allergen: &str) -> bool {
        self.allergens
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(allergen))
    }
}

const BREAKFAST_SAFE: MealOption = MealOption {
    name: "Chia Tohumlu Meyve Kasesi",
    description: "Hindistan cevizi sütünde bekletilmiş chia ve mevsim meyveleri",
    ingredients: &[
        "chia seeds",
        "coconut milk",
        "banana",
        "strawberries",
        "cinnamon",
    ],
    instructions: &[
        "Chia tohumlarını hindistan cevizi sütüyle karıştırıp 15 dakika bekletin",
        "Üzerine dilimlenmiş muz ve çilek ekleyin",
        "Tarçın serpip servis edin",
    ],
    allergens: &[],
    dietary_tags: &["vegan", "vegetarian", "gluten_free", "dairy_free"],
    cuisine: "international",
};

const LUNCH_SAFE: MealOption = MealOption {
    name: "Nohutlu Kinoa Salatası",
    description: "Haşlanmış kinoa, nohut ve taze sebzelerle limonlu salata",
    ingredients: &[
        "quinoa",
        "chickpeas",
        "cucumber",
        "tomato",
        "parsley",
        "lemon juice",
        "olive oil",
    ],
    instructions: &[
        "Kinoayı iki katı suda 15 dakika haşlayıp soğutun",
        "Sebzeleri küp doğrayın ve nohutla karıştırın",
        "Limon suyu ve zeytinyağı ile tatlandırın",
    ],
    allergens: &[],
    dietary_tags: &["vegan", "vegetarian", "gluten_free", "high_fiber"],
    cuisine: "mediterranean",
};

const DINNER_SAFE: MealOption = MealOption {
    name: "Zeytinyağlı Taze Fasulye ve Pirinç Pilavı",
    description: "Domatesli zeytinyağlı fasulye, yanında sade pirinç pilavı",
    ingredients: &[
        "green beans",
        "tomato",
        "onion",
        "olive oil",
        "rice",
    ],
    instructions: &[
        "Soğanı zeytinyağında kavurun, fasulye ve domatesi ekleyin",
        "Kısık ateşte 30 dakika pişirin",
        "Pirinci haşlayıp demlendirin ve birlikte servis edin",
    ],
    allergens: &[],
    dietary_tags: &["vegan", "vegetarian", "gluten_free"],
    cuisine: "turkish",
};

const SNACK_SAFE: MealOption = MealOption {
    name: "Elma ve Havuç Dilimleri",
    description: "Taze elma ve havuç dilimleri",
    ingredients: &["apple", "carrot"],
    instructions: &["Elma ve havucu yıkayıp dilimleyin"],
    allergens: &[],
    dietary_tags: &["vegan", "vegetarian", "gluten_free", "low_calorie"],
    cuisine: "international",
};

/// Breakfast options
pub static BREAKFAST_OPTIONS: &[MealOption] = &[
    MealOption {
        name: "Menemen",
        description: "Domates ve biberle pişirilmiş yumurta, tam buğday ekmeği ile",
        ingredients: &[
            "eggs",
            "tomato",
            "green pepper",
            "olive oil",
            "whole wheat bread",
        ],
        instructions: &[
            "Biberleri zeytinyağında soteleyin",
            "Rendelenmiş domatesi ekleyip suyunu çekene kadar pişirin",
            "Yumurtaları kırıp karıştırarak pişirin",
        ],
        allergens: &["egg", "gluten"],
        dietary_tags: &["vegetarian", "high_protein"],
        cuisine: "turkish",
    },
    MealOption {
        name: "Yulaf Lapası",
        description: "Sütte pişmiş yulaf, ceviz ve muzla",
        ingredients: &["oats", "milk", "walnuts", "banana", "honey"],
        instructions: &[
            "Yulafı sütle kısık ateşte 5 dakika pişirin",
            "Üzerine ceviz ve muz dilimleri ekleyin",
            "Bir tatlı kaşığı bal gezdirin",
        ],
        allergens: &["dairy", "nuts", "gluten"],
        dietary_tags: &["vegetarian", "high_fiber"],
        cuisine: "international",
    },
    MealOption {
        name: "Beyaz Peynirli Türk Kahvaltısı",
        description: "Beyaz peynir, zeytin, domates, salatalık ve tam buğday ekmeği",
        ingredients: &[
            "feta cheese",
            "black olives",
            "tomato",
            "cucumber",
            "whole wheat bread",
        ],
        instructions: &[
            "Sebzeleri dilimleyin",
            "Peynir ve zeytinle birlikte tabağa dizin",
        ],
        allergens: &["dairy", "gluten"],
        dietary_tags: &["vegetarian"],
        cuisine: "turkish",
    },
    MealOption {
        name: "Lor Peynirli Omlet",
        description: "Lor peyniri ve ıspanakla hafif omlet",
        ingredients: &["eggs", "curd cheese", "spinach", "olive oil"],
        instructions: &[
            "Ispanağı zeytinyağında öldürün",
            "Çırpılmış yumurtayı ekleyin, üzerine loru serpin",
            "Kapağı kapalı kısık ateşte pişirin",
        ],
        allergens: &["egg", "dairy"],
        dietary_tags: &["vegetarian", "high_protein", "gluten_free"],
        cuisine: "turkish",
    },
    MealOption {
        name: "Yoğurtlu Granola Kasesi",
        description: "Süzme yoğurt, granola ve orman meyveleri",
        ingredients: &["strained yogurt", "granola", "blueberries", "honey"],
        instructions: &[
            "Yoğurdu kaseye alın",
            "Granola ve meyveleri üzerine ekleyin",
        ],
        allergens: &["dairy", "gluten", "nuts"],
        dietary_tags: &["vegetarian", "high_protein"],
        cuisine: "international",
    },
    BREAKFAST_SAFE,
];

/// Lunch options
pub static LUNCH_OPTIONS: &[MealOption] = &[
    MealOption {
        name: "Izgara Tavuk ve Bulgur Pilavı",
        description: "Izgara tavuk göğsü, bulgur pilavı ve çoban salata",
        ingredients: &[
            "chicken breast",
            "bulgur",
            "tomato",
            "cucumber",
            "onion",
            "olive oil",
        ],
        instructions: &[
            "Tavuğu baharatlayıp ızgarada pişirin",
            "Bulguru salçalı suda pişirip demlendirin",
            "Salata malzemelerini doğrayıp karıştırın",
        ],
        allergens: &["gluten"],
        dietary_tags: &["high_protein"],
        cuisine: "turkish",
    },
    MealOption {
        name: "Mercimek Çorbası ve Tam Buğday Ekmeği",
        description: "Kırmızı mercimek çorbası, yanında bir dilim tam buğday ekmeği",
        ingredients: &[
            "red lentils",
            "onion",
            "carrot",
            "olive oil",
            "whole wheat bread",
        ],
        instructions: &[
            "Soğan ve havucu kavurun, mercimeği ekleyin",
            "Su ekleyip 25 dakika pişirin ve blenderdan geçirin",
        ],
        allergens: &["gluten"],
        dietary_tags: &["vegan", "vegetarian", "high_fiber"],
        cuisine: "turkish",
    },
    MealOption {
        name: "Ton Balıklı Salata",
        description: "Ton balığı, mısır, marul ve zeytinyağlı sos",
        ingredients: &["tuna", "lettuce", "corn", "tomato", "lemon juice", "olive oil"],
        instructions: &[
            "Marulu doğrayın",
            "Ton balığı ve mısırı ekleyip sosla karıştırın",
        ],
        allergens: &["fish"],
        dietary_tags: &["high_protein", "gluten_free"],
        cuisine: "mediterranean",
    },
    MealOption {
        name: "Zeytinyağlı Yaprak Sarma ve Yoğurt",
        description: "Pirinçli yaprak sarma, yanında yoğurt",
        ingredients: &["grape leaves", "rice", "onion", "olive oil", "yogurt"],
        instructions: &[
            "İç harcı hazırlayıp yapraklara sarın",
            "Kısık ateşte 40 dakika pişirin",
            "Soğuk olarak yoğurtla servis edin",
        ],
        allergens: &["dairy"],
        dietary_tags: &["vegetarian", "gluten_free"],
        cuisine: "turkish",
    },
    MealOption {
        name: "Fırın Sebzeli Tavuk Dürüm",
        description: "Lavaşa sarılı tavuk ve fırın sebze",
        ingredients: &[
            "chicken breast",
            "lavash bread",
            "zucchini",
            "red pepper",
            "yogurt",
        ],
        instructions: &[
            "Tavuk ve sebzeleri fırında 25 dakika pişirin",
            "Lavaşa yoğurt sürüp malzemeleri sarın",
        ],
        allergens: &["gluten", "dairy"],
        dietary_tags: &["high_protein"],
        cuisine: "turkish",
    },
    LUNCH_SAFE,
];

/// Dinner options
pub static DINNER_OPTIONS: &[MealOption] = &[
    MealOption {
        name: "Fırında Somon ve Buharda Brokoli",
        description: "Limonlu fırın somon, buharda brokoli ve haşlanmış patates",
        ingredients: &["salmon", "broccoli", "potato", "lemon", "olive oil"],
        instructions: &[
            "Somonu limon ve zeytinyağıyla 200°C fırında 18 dakika pişirin",
            "Brokoliyi buharda 6 dakika pişirin",
        ],
        allergens: &["fish"],
        dietary_tags: &["high_protein", "gluten_free", "omega_3"],
        cuisine: "mediterranean",
    },
    MealOption {
        name: "Izgara Köfte ve Piyaz",
        description: "Dana kıymadan ızgara köfte, fasulye piyazı",
        ingredients: &[
            "ground beef",
            "onion",
            "white beans",
            "parsley",
            "breadcrumbs",
        ],
        instructions: &[
            "Kıymayı soğan ve galeta unuyla yoğurup köfte şekli verin",
            "Izgarada pişirin",
            "Haşlanmış fasulyeyi soğan ve maydanozla karıştırın",
        ],
        allergens: &["gluten"],
        dietary_tags: &["high_protein"],
        cuisine: "turkish",
    },
    MealOption {
        name: "Etli Kuru Fasulye ve Pilav",
        description: "Kuşbaşı etli kuru fasulye, pirinç pilavı",
        ingredients: &["white beans", "lamb", "tomato paste", "onion", "rice"],
        instructions: &[
            "Eti soğanla kavurun, salça ve fasulyeyi ekleyin",
            "Su ilave edip 45 dakika pişirin",
            "Pilavla servis edin",
        ],
        allergens: &[],
        dietary_tags: &["high_protein", "high_fiber", "gluten_free"],
        cuisine: "turkish",
    },
    MealOption {
        name: "Sebzeli Nohut Yemeği ve Bulgur",
        description: "Domatesli nohut yemeği, bulgur pilavı",
        ingredients: &["chickpeas", "tomato", "onion", "red pepper", "bulgur"],
        instructions: &[
            "Sebzeleri kavurup haşlanmış nohudu ekleyin",
            "20 dakika pişirin, bulgur pilavıyla servis edin",
        ],
        allergens: &["gluten"],
        dietary_tags: &["vegan", "vegetarian", "high_fiber"],
        cuisine: "turkish",
    },
    MealOption {
        name: "Fırında Tavuk Baget ve Yoğurtlu Semizotu",
        description: "Baharatlı fırın tavuk, yoğurtlu semizotu salatası",
        ingredients: &["chicken drumsticks", "purslane", "yogurt", "garlic"],
        instructions: &[
            "Tavukları baharatlayıp 190°C fırında 40 dakika pişirin",
            "Semizotunu sarımsaklı yoğurtla karıştırın",
        ],
        allergens: &["dairy"],
        dietary_tags: &["high_protein", "gluten_free"],
        cuisine: "turkish",
    },
    DINNER_SAFE,
];

/// Snack options
pub static SNACK_OPTIONS: &[MealOption] = &[
    MealOption {
        name: "Çiğ Badem ve Kuru Kayısı",
        description: "Bir avuç çiğ badem ve üç kuru kayısı",
        ingredients: &["almonds", "dried apricots"],
        instructions: &["Porsiyonlayıp servis edin"],
        allergens: &["nuts"],
        dietary_tags: &["vegan", "vegetarian", "gluten_free"],
        cuisine: "turkish",
    },
    MealOption {
        name: "Ayran",
        description: "Bir bardak ev yapımı ayran",
        ingredients: &["yogurt", "water", "salt"],
        instructions: &["Yoğurdu su ve tuzla çırpın"],
        allergens: &["dairy"],
        dietary_tags: &["vegetarian", "gluten_free"],
        cuisine: "turkish",
    },
    MealOption {
        name: "Humus ve Sebze Çubukları",
        description: "Tahinli humus, havuç ve salatalık çubukları",
        ingredients: &["chickpeas", "tahini", "lemon juice", "carrot", "cucumber"],
        instructions: &[
            "Nohut, tahin ve limonu pürüzsüz olana kadar çekin",
            "Sebzeleri çubuk şeklinde kesin",
        ],
        allergens: &["sesame"],
        dietary_tags: &["vegan", "vegetarian", "gluten_free"],
        cuisine: "mediterranean",
    },
    MealOption {
        name: "Haşlanmış Yumurta",
        description: "İki adet haşlanmış yumurta",
        ingredients: &["eggs", "salt"],
        instructions: &["Yumurtaları 9 dakika haşlayın"],
        allergens: &["egg"],
        dietary_tags: &["vegetarian", "high_protein", "gluten_free"],
        cuisine: "international",
    },
    MealOption {
        name: "Tam Buğday Galeta ve Peynir",
        description: "Tam buğday galeta ve bir dilim kaşar peyniri",
        ingredients: &["whole wheat crackers", "kashar cheese"],
        instructions: &["Porsiyonlayıp servis edin"],
        allergens: &["gluten", "dairy"],
        dietary_tags: &["vegetarian"],
        cuisine: "turkish",
    },
    SNACK_SAFE,
];

/// Option table of a slot
#[must_use]
pub fn options_for(slot: MealSlot) -> &'static [MealOption] {
    match slot {
        MealSlot::Breakfast => BREAKFAST_OPTIONS,
        MealSlot::Lunch => LUNCH_OPTIONS,
        MealSlot::Dinner => DINNER_OPTIONS,
        MealSlot::Snacks => SNACK_OPTIONS,
    }
}

/// Designated safe option of a slot: vegan, allergen-free, gluten-free
#[must_use]
pub const fn safe_option(slot: MealSlot) -> &'static MealOption {
    match slot {
        MealSlot::Breakfast => &BREAKFAST_SAFE,
        MealSlot::Lunch => &LUNCH_SAFE,
        MealSlot::Dinner => &DINNER_SAFE,
        MealSlot::Snacks => &SNACK_SAFE,
    }
}
