//! Bundled URL scheme lists.
//!
//! Three disjoint sets: officially registered schemes used with an authority
//! (`scheme://`), widely used unofficial schemes used the same way, and
//! schemes that are followed by `:` with no authority component.

/// Sorted list of officially registered schemes that are used with an
/// authority component (`scheme://`).
pub const SCHEMES: &[&str] = &[
    "aaa",
    "aaas",
    "about",
    "acap",
    "cap",
    "coap",
    "coaps",
    "crid",
    "data",
    "dav",
    "dict",
    "dns",
    "dtn",
    "ftp",
    "ftps",
    "geo",
    "git",
    "go",
    "gopher",
    "h323",
    "http",
    "https",
    "iax",
    "icap",
    "im",
    "imap",
    "info",
    "ipp",
    "ipps",
    "irc",
    "irc6",
    "ircs",
    "iris",
    "iris.beep",
    "iris.xpc",
    "iris.xpcs",
    "jabber",
    "ldap",
    "ldaps",
    "mms",
    "msrp",
    "msrps",
    "mtqp",
    "mupdate",
    "news",
    "nfs",
    "ni",
    "nih",
    "nntp",
    "opaquelocktoken",
    "pop",
    "pres",
    "reload",
    "rsync",
    "rtsp",
    "rtsps",
    "rtspu",
    "service",
    "session",
    "shttp",
    "sieve",
    "sip",
    "sips",
    "smb",
    "snmp",
    "soap.beep",
    "soap.beeps",
    "ssh",
    "stun",
    "stuns",
    "svn",
    "telnet",
    "tftp",
    "thismessage",
    "tip",
    "tn3270",
    "turn",
    "turns",
    "tv",
    "udp",
    "vemmi",
    "vnc",
    "ws",
    "wss",
    "xcon",
    "xcon-userid",
    "xmlrpc.beep",
    "xmlrpc.beeps",
    "z39.50r",
    "z39.50s",
];

/// Sorted list of some widely used unofficial schemes that are used with an
/// authority component (`scheme://`).
pub const SCHEMES_UNOFFICIAL: &[&str] = &[
    "chrome",          // Chrome internal pages
    "chrome-extension", // Chrome extensions
    "ed2k",            // eDonkey
    "facetime",        // FaceTime
    "feed",            // Web feeds
    "gemini",          // Gemini
    "jdbc",            // Java Database Connectivity
    "moz-extension",   // Firefox extensions
    "postgres",        // PostgreSQL
    "postgresql",      // PostgreSQL
    "slack",           // Slack
    "steam",           // Steam
    "webcal",          // Calendar subscriptions
    "zoommtg",         // Zoom
    "zoomus",          // Zoom
];

/// Sorted list of some well-known schemes that are followed by `:` instead
/// of `://`. The list includes both officially registered and unofficial
/// schemes.
pub const SCHEMES_NO_AUTHORITY: &[&str] = &[
    "bitcoin", // Bitcoin
    "cid",     // Content-ID
    "file",    // Files
    "magnet",  // Torrent magnets
    "mailto",  // Mail
    "mid",     // Message-ID
    "sms",     // SMS
    "tel",     // Telephone
    "xmpp",    // XMPP
];
