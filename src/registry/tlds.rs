//! Domain suffix tables.
//!
//! Order matters: suffix alternatives are tried in table order, generic suffixes before
//! country codes. Entries are lowercase; matching is case-insensitive.

/// Generic top-level domains, in match priority order.
pub const GENERIC_TLDS: &[&str] = &[
    "abb", "abbott", "abogado", "academy", "accenture", "accountant", "accountants", "active",
    "actor", "ads", "adult", "aeg", "aero", "afl", "agency", "aig", "airforce", "allfinanz",
    "alsace", "amsterdam", "android", "apartments", "aquarelle", "archi", "army", "arpa", "asia",
    "associates", "attorney", "auction", "audio", "auto", "autos", "axa", "azure", "band", "bank",
    "bar", "barclaycard", "barclays", "bargains", "bauhaus", "bayern", "bbc", "bbva", "beer",
    "berlin", "best", "bharti", "bible", "bid", "bike", "bing", "bingo", "bio", "biz", "black",
    "blackfriday", "bloomberg", "blue", "bmw", "bnl", "bnpparibas", "boats", "bond", "boo",
    "boutique", "bradesco", "bridgestone", "broker", "brother", "brussels", "budapest", "build",
    "builders", "business", "buzz", "bzh", "cab", "cafe", "cal", "camera", "camp", "cancerresearch",
    "canon", "capetown", "capital", "caravan", "cards", "care", "career", "careers", "cars",
    "cartier", "casa", "cash", "casino", "cat", "catering", "cba", "cbn", "center", "ceo", "cern",
    "cfa", "cfd", "channel", "chat", "cheap", "chloe", "christmas", "chrome", "church", "cisco",
    "citic", "city", "claims", "cleaning", "click", "clinic", "clothing", "cloud", "club", "coach",
    "codes", "coffee", "college", "cologne", "com", "commbank", "community", "company", "computer",
    "condos", "construction", "consulting", "contractors", "cooking", "cool", "coop", "corsica",
    "country", "coupons", "courses", "credit", "creditcard", "cricket", "crown", "crs", "cruises",
    "cuisinella", "cymru", "cyou", "dabur", "dad", "dance", "date", "dating", "datsun", "day",
    "dclk", "deals", "degree", "delivery", "democrat", "dental", "dentist", "desi", "design", "dev",
    "diamonds", "diet", "digital", "direct", "directory", "discount", "dnp", "docs", "dog", "doha",
    "domains", "doosan", "download", "drive", "durban", "dvag", "earth", "eat", "edu", "education",
    "email", "emerck", "energy", "engineer", "engineering", "enterprises", "epson", "equipment",
    "erni", "esq", "estate", "eurovision", "eus", "events", "everbank", "exchange", "expert",
    "exposed", "express", "fail", "faith", "fan", "fans", "farm", "fashion", "feedback", "film",
    "finance", "financial", "firmdale", "fish", "fishing", "fit", "fitness", "flights", "florist",
    "flowers", "flsmidth", "fly", "foo", "football", "forex", "forsale", "forum", "foundation",
    "frl", "frogans", "fund", "furniture", "futbol", "fyi", "gal", "gallery", "garden", "gbiz",
    "gdn", "gent", "genting", "ggee", "gift", "gifts", "gives", "glass", "gle", "global", "globo",
    "gmail", "gmo", "gmx", "gold", "goldpoint", "golf", "goo", "goog", "google", "gop", "gov",
    "graphics", "gratis", "green", "gripe", "guge", "guide", "guitars", "guru", "hamburg",
    "hangout", "haus", "healthcare", "help", "here", "hermes", "hiphop", "hitachi", "hiv", "hockey",
    "holdings", "holiday", "homedepot", "homes", "honda", "horse", "host", "hosting", "hoteles",
    "hotmail", "house", "how", "ibm", "icbc", "icu", "ifm", "immo", "immobilien", "industries",
    "infiniti", "info", "ing", "ink", "institute", "insure", "int", "international", "investments",
    "irish", "iwc", "java", "jcb", "jetzt", "jewelry", "jlc", "jll", "jobs", "joburg", "juegos",
    "kaufen", "kddi", "kim", "kitchen", "kiwi", "koeln", "komatsu", "krd", "kred", "kyoto",
    "lacaixa", "land", "lasalle", "lat", "latrobe", "law", "lawyer", "lds", "lease", "leclerc",
    "legal", "lgbt", "liaison", "lidl", "life", "lighting", "limited", "limo", "link", "loan",
    "loans", "lol", "london", "lotte", "lotto", "love", "ltda", "lupin", "luxe", "luxury", "madrid",
    "maif", "maison", "management", "mango", "market", "marketing", "markets", "marriott", "mba",
    "media", "meet", "melbourne", "meme", "memorial", "men", "menu", "miami", "microsoft", "mil",
    "mini", "mma", "mobi", "moda", "moe", "monash", "money", "montblanc", "mormon", "mortgage",
    "moscow", "motorcycles", "mov", "movie", "movistar", "mtn", "mtpc", "museum", "nadex", "nagoya",
    "name", "navy", "nec", "net", "netbank", "network", "neustar", "new", "news", "nexus", "ngo",
    "nhk", "nico", "ninja", "nissan", "nra", "nrw", "ntt", "nyc", "office", "okinawa", "omega",
    "one", "ong", "onl", "online", "ooo", "oracle", "org", "organic", "osaka", "otsuka", "ovh",
    "page", "panerai", "paris", "partners", "parts", "party", "pharmacy", "philips", "photo",
    "photography", "photos", "physio", "piaget", "pics", "pictet", "pictures", "pink", "pizza",
    "place", "play", "plumbing", "plus", "pohl", "poker", "porn", "post", "praxi", "press", "pro",
    "prod", "productions", "prof", "properties", "property", "pub", "qpon", "quebec", "racing",
    "realtor", "realty", "recipes", "red", "redstone", "rehab", "reise", "reisen", "reit", "ren",
    "rent", "rentals", "repair", "report", "republican", "rest", "restaurant", "review", "reviews",
    "rich", "ricoh", "rio", "rip", "rocks", "rodeo", "rsvp", "ruhr", "run", "ryukyu", "saarland",
    "sale", "samsung", "sandvik", "sandvikcoromant", "sap", "sarl", "saxo", "sca", "scb", "schmidt",
    "scholarships", "school", "schule", "schwarz", "science", "scor", "scot", "seat", "sener",
    "services", "sew", "sex", "sexy", "shiksha", "shoes", "show", "shriram", "singles", "site",
    "ski", "sky", "skype", "sncf", "soccer", "social", "software", "sohu", "solar", "solutions",
    "sony", "soy", "space", "spiegel", "spreadbetting", "starhub", "statoil", "study", "style",
    "sucks", "supplies", "supply", "support", "surf", "surgery", "suzuki", "swatch", "swiss",
    "sydney", "systems", "taipei", "tatar", "tattoo", "tax", "taxi", "team", "tech", "technology",
    "tel", "telefonica", "temasek", "tennis", "thd", "theater", "tickets", "tienda", "tips",
    "tires", "tirol", "today", "tokyo", "tools", "top", "toray", "toshiba", "tours", "town", "toys",
    "trade", "trading", "training", "travel", "trust", "tui", "university", "uno", "uol",
    "vacations", "vegas", "ventures", "vermögensberater", "vermögensberatung", "versicherung",
    "vet", "viajes", "video", "villas", "vision", "vista", "vistaprint", "vlaanderen", "vodka",
    "vote", "voting", "voto", "voyage", "wales", "walter", "wang", "watch", "webcam", "website",
    "wed", "wedding", "weir", "whoswho", "wien", "wiki", "williamhill", "win", "windows", "wme",
    "work", "works", "world", "wtc", "wtf", "xbox", "xerox", "xin", "xxx", "xyz", "yachts",
    "yandex", "yodobashi", "yoga", "yokohama", "youtube", "zip", "zone", "zuerich", "дети",
    "москва", "онлайн", "орг", "рус", "сайт", "بازار", "شبكة", "موقع", "संगठन", "みんな", "グーグル", "世界",
    "中信", "中文网", "企业", "佛山", "信息", "健康", "八卦", "公司", "公益", "商城", "商店", "商标", "在线", "娱乐", "工行", "广东",
    "慈善", "我爱你", "手机", "政务", "政府", "时尚", "机构", "淡马锡", "游戏", "移动", "组织机构", "网址", "网店", "网络", "谷歌",
    "集团", "飞利浦", "餐厅", "삼성", "onion",
];

/// Country-code top-level domains, including internationalized ones.
pub const COUNTRY_TLDS: &[&str] = &[
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "an", "ao", "aq", "ar", "as", "at", "au", "aw",
    "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bl", "bm", "bn", "bo", "bq",
    "br", "bs", "bt", "bv", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl",
    "cm", "cn", "co", "cr", "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz",
    "ec", "ee", "eg", "eh", "er", "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga", "gb",
    "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu", "gw",
    "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io", "iq", "ir", "is",
    "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki", "km", "kn", "kp", "kr", "kw", "ky", "kz",
    "la", "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv", "ly", "ma", "mc", "md", "me", "mf",
    "mg", "mh", "mk", "ml", "mm", "mn", "mo", "mp", "mq", "mr", "ms", "mt", "mu", "mv", "mw", "mx",
    "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no", "np", "nr", "nu", "nz", "om", "pa",
    "pe", "pf", "pg", "ph", "pk", "pl", "pm", "pn", "pr", "ps", "pt", "pw", "py", "qa", "re", "ro",
    "rs", "ru", "rw", "sa", "sb", "sc", "sd", "se", "sg", "sh", "si", "sj", "sk", "sl", "sm", "sn",
    "so", "sr", "ss", "st", "su", "sv", "sx", "sy", "sz", "tc", "td", "tf", "tg", "th", "tj", "tk",
    "tl", "tm", "tn", "to", "tp", "tr", "tt", "tv", "tw", "tz", "ua", "ug", "uk", "um", "us", "uy",
    "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf", "ws", "ye", "yt", "za", "zm", "zw", "ελ",
    "бел", "мкд", "мон", "рф", "срб", "укр", "қаз", "հայ", "الاردن", "الجزائر", "السعودية",
    "المغرب", "امارات", "ایران", "بھارت", "تونس", "سودان", "سورية", "عراق", "عمان", "فلسطين", "قطر",
    "مصر", "مليسيا", "پاکستان", "भारत", "বাংলা", "ভারত", "ਭਾਰਤ", "ભારત", "இந்தியா", "இலங்கை",
    "சிங்கப்பூர்", "భారత్", "ලංකා", "ไทย", "გე", "中国", "中國", "台湾", "台灣", "新加坡", "澳門", "香港", "한국",
];

/// Prefix of an ASCII-compatible encoded (punycode) label.
pub const PUNYCODE_PREFIX: &str = "xn--";
