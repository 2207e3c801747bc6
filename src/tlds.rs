//! Bundled top-level-domain and public-suffix data.
//!
//! This is the data an external TLD-list provider would hand to
//! [`TldRegistry::new`](crate::registry::TldRegistry::new): a lowercase
//! snapshot of the IANA root zone plus the multi-label public suffixes in
//! common registrar use. Entries do not need to be sorted or unique here;
//! the registry normalizes on construction.

/// Known top-level domains and public suffixes: generic and country-code
/// TLDs, multi-label registrar suffixes, punycode TLDs, and Unicode TLDs.
pub const TLDS: &[&str] = &[
    // Generic and sponsored TLDs.
    "aero", "asia", "biz", "cat", "com", "coop", "edu", "gov", "info", "int", "jobs", "mil",
    "mobi", "museum", "name", "net", "org", "post", "pro", "tel", "travel", "xxx",
    // Country-code TLDs.
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "ao", "aq", "ar", "as", "at", "au", "aw",
    "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br",
    "bs", "bt", "bv", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl",
    "cm", "cn", "co", "cr", "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do",
    "dz", "ec", "ee", "eg", "er", "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga",
    "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu",
    "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io", "iq",
    "ir", "is", "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki", "km", "kn", "kp", "kr",
    "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv", "ly", "ma",
    "mc", "md", "me", "mg", "mh", "mk", "ml", "mm", "mn", "mo", "mp", "mq", "mr", "ms", "mt",
    "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no", "np",
    "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm", "pn", "pr", "ps",
    "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb", "sc", "sd", "se", "sg",
    "sh", "si", "sj", "sk", "sl", "sm", "sn", "so", "sr", "ss", "st", "su", "sv", "sx", "sy",
    "sz", "tc", "td", "tf", "tg", "th", "tj", "tk", "tl", "tm", "tn", "to", "tr", "tt", "tv",
    "tw", "tz", "ua", "ug", "uk", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu",
    "wf", "ws", "ye", "yt", "za", "zm", "zw",
    // New generic TLDs.
    "academy", "agency", "app", "art", "band", "bar", "best", "blog", "boutique", "build",
    "builders", "business", "cafe", "camera", "camp", "capital", "cards", "care", "careers",
    "casa", "cash", "casino", "center", "chat", "cheap", "church", "city", "claims", "cleaning",
    "click", "clinic", "clothing", "cloud", "club", "coach", "codes", "coffee", "community",
    "company", "computer", "condos", "construction", "consulting", "contractors", "cool",
    "credit", "creditcard", "cruises", "dance", "dating", "deals", "delivery", "democrat",
    "dental", "design", "dev", "diamonds", "digital", "direct", "directory", "discount", "dog",
    "domains", "education", "email", "energy", "engineering", "enterprises", "equipment",
    "estate", "events", "exchange", "expert", "exposed", "express", "fail", "farm", "finance",
    "financial", "fish", "fitness", "flights", "florist", "fund", "furniture", "gallery",
    "games", "gift", "gifts", "glass", "global", "gold", "golf", "graphics", "gratis", "green",
    "group", "guide", "guru", "health", "healthcare", "help", "hockey", "holdings", "holiday",
    "host", "hosting", "house", "how", "immo", "industries", "ink", "institute", "insurance",
    "international", "investments", "land", "lease", "legal", "life", "lighting", "limited",
    "limo", "link", "live", "loan", "loans", "lol", "ltd", "maison", "management", "market",
    "marketing", "media", "memorial", "money", "mortgage", "movie", "network", "news", "ninja",
    "online", "page", "partners", "parts", "party", "photo", "photography", "photos", "pics",
    "pictures", "pizza", "place", "plumbing", "plus", "press", "productions", "properties",
    "property", "pub", "realty", "recipes", "red", "rehab", "rent", "rentals", "repair",
    "report", "rest", "restaurant", "reviews", "rip", "rocks", "run", "sale", "salon", "school",
    "schule", "science", "services", "shoes", "shop", "shopping", "show", "singles", "site",
    "ski", "soccer", "social", "software", "solar", "solutions", "space", "store", "stream",
    "studio", "study", "style", "supplies", "supply", "support", "surf", "surgery", "systems",
    "tax", "taxi", "team", "tech", "technology", "tennis", "theater", "tienda", "tips", "tires",
    "today", "tools", "top", "tours", "town", "toys", "trade", "training", "university", "uno",
    "vacations", "ventures", "vet", "viajes", "video", "villas", "vin", "vip", "vision",
    "vodka", "vote", "voyage", "watch", "webcam", "website", "wedding", "wiki", "win", "wine",
    "work", "works", "world", "wtf", "xyz", "yoga", "zone",
    // Multi-label public suffixes.
    "ac.in", "ac.jp", "ac.kr", "ac.nz", "ac.th", "ac.uk", "ac.za", "ad.jp", "asn.au", "co.id",
    "co.il", "co.in", "co.jp", "co.ke", "co.kr", "co.nz", "co.th", "co.uk", "co.za", "com.ar",
    "com.au", "com.bd", "com.br", "com.cn", "com.co", "com.eg", "com.gr", "com.hk", "com.mx",
    "com.my", "com.ng", "com.ph", "com.pk", "com.pl", "com.sa", "com.sg", "com.tr", "com.tw",
    "com.ua", "com.vn", "ed.jp", "edu.au", "edu.cn", "edu.eg", "edu.hk", "edu.in", "edu.mx",
    "edu.my", "edu.pl", "edu.sg", "edu.tr", "edu.tw", "edu.vn", "geek.nz", "gen.in", "go.id",
    "go.jp", "go.ke", "go.kr", "go.th", "gob.ar", "gob.es", "gob.mx", "gov.au", "gov.br",
    "gov.cn", "gov.co", "gov.hk", "gov.in", "gov.my", "gov.ph", "gov.pl", "gov.sa", "gov.sg",
    "gov.tr", "gov.tw", "gov.uk", "gov.za", "govt.nz", "gr.jp", "id.au", "idv.tw", "in.th",
    "in.ua", "ind.in", "lg.jp", "ltd.uk", "me.uk", "med.sa", "mil.in", "muni.il", "ne.jp",
    "ne.ke", "ne.kr", "net.au", "net.br", "net.cn", "net.gr", "net.hk", "net.il", "net.in",
    "net.mx", "net.my", "net.nz", "net.ph", "net.pl", "net.sa", "net.sg", "net.th", "net.tr",
    "net.tw", "net.ua", "net.uk", "net.vn", "net.za", "nic.in", "nom.co", "nom.es", "or.id",
    "or.jp", "or.ke", "or.kr", "or.th", "org.ar", "org.au", "org.br", "org.cn", "org.co",
    "org.eg", "org.gr", "org.hk", "org.il", "org.in", "org.mx", "org.my", "org.nz", "org.ph",
    "org.pk", "org.pl", "org.sa", "org.sg", "org.tr", "org.tw", "org.ua", "org.uk", "org.vn",
    "org.za", "per.sg", "plc.uk", "re.kr", "res.in", "sch.id", "sch.uk", "waw.pl", "web.id",
    "web.za",
    // Punycode TLDs.
    "xn--11b4c3d", "xn--3e0b707e", "xn--45brj9c", "xn--55qx5d", "xn--80ao21a", "xn--80asehdb",
    "xn--80aswg", "xn--90a3ac", "xn--90ais", "xn--9dbq2a", "xn--d1alf", "xn--e1a4c",
    "xn--fiq228c5hs", "xn--fiqs8s", "xn--fiqz9s", "xn--flw351e", "xn--gecrj9c", "xn--h2brj9c",
    "xn--io0a7i", "xn--j1amh", "xn--j6w193g", "xn--kprw13d", "xn--kpry57d", "xn--kput3i",
    "xn--l1acc", "xn--lgbbat1ad8j", "xn--mgb9awbf", "xn--mgba3a4f16a", "xn--mgbaam7a8h",
    "xn--mgbayh7gpa", "xn--mgbbh1a71e", "xn--mgberp4a5d4ar", "xn--mk1bu44c", "xn--ngbc5azd",
    "xn--node", "xn--o3cw4h", "xn--p1ai", "xn--pgbs0dh", "xn--q9jyb4c", "xn--qxam",
    "xn--rhqv96g", "xn--s9brj9c", "xn--ses554g", "xn--t60b56a", "xn--tckwe", "xn--unup4y",
    "xn--vuq861b", "xn--wgbh1c", "xn--wgbl6a", "xn--xkc2dl3a5ee0h", "xn--ygbi2ammx",
    // Unicode TLDs.
    "ελ", "бг", "бел", "дети", "ею", "каз", "мкд", "мон", "москва", "онлайн", "орг", "рус",
    "рф", "сайт", "срб", "укр", "қаз", "հայ", "קום", "ישראל", "ابوظبي", "اتصالات", "الاردن",
    "الجزائر", "السعودية", "المغرب", "امارات", "ايران", "بازار", "بھارت", "تونس", "سودان",
    "سورية", "شبكة", "عرب", "عمان", "فلسطين", "قطر", "كوم", "مصر", "مليسيا", "موريتانيا",
    "موقع", "همراه", "پاکستان", "भारत", "संगठन", "বাংলা", "ভারত", "ਭਾਰਤ", "ભારત", "இந்தியா",
    "இலங்கை", "சிங்கப்பூர்", "భారత్", "ಭಾರತ", "ഭാരതം", "ලංකා", "ไทย", "คอม", "ລາວ", "გე",
    "みんな", "クラウド", "コム", "ストア", "セール", "ファッション", "ポイント", "世界", "中国",
    "中國", "中文网", "企业", "佛山", "信息", "健康", "八卦", "公司", "商城", "商店", "商标",
    "在线", "大拿", "娱乐", "广东", "微博", "慈善", "我爱你", "手机", "招聘", "政务", "新加坡",
    "新闻", "时尚", "机构", "淡马锡", "游戏", "点看", "移动", "组织机构", "网址", "网店", "网站",
    "网络", "联通", "谷歌", "集团", "飞利浦", "香港", "닷넷", "닷컴", "삼성", "한국",
];

/// Pseudo-TLDs: non-ICANN suffixes in wide enough use that hosts carrying
/// them should still split cleanly.
pub const PSEUDO_TLDS: &[&str] = &[
    "bit",       // Namecoin
    "example",   // Example domain
    "exit",      // Tor exit node
    "gnu",       // GNS
    "i2p",       // I2P network
    "invalid",   // Invalid domain
    "local",     // Local network
    "localhost", // Local network
    "onion",     // Tor hidden services
    "test",      // Test domain
    "zkey",      // GNS
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_entries_lowercase() {
        for tld in TLDS.iter().chain(PSEUDO_TLDS) {
            assert_eq!(*tld, tld.to_lowercase(), "{} not lowercase", tld);
        }
    }

    #[test]
    fn test_no_leading_or_trailing_dots() {
        for tld in TLDS.iter().chain(PSEUDO_TLDS) {
            assert!(!tld.starts_with('.') && !tld.ends_with('.'), "bad entry {}", tld);
            assert!(!tld.is_empty());
        }
    }

    #[test]
    fn test_multi_label_suffixes_present() {
        assert!(TLDS.contains(&"co.uk"));
        assert!(TLDS.contains(&"com.au"));
        assert!(TLDS.contains(&"co.jp"));
    }

    #[test]
    fn test_pseudo_tlds_disjoint_from_tlds() {
        for tld in PSEUDO_TLDS {
            assert!(!TLDS.contains(tld), "{} in both lists", tld);
        }
    }
}
