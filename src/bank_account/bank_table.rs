use crate::bank_account::config::{BankSpecConfig, Comment};
use crate::checksum::ChecksumAlgorithm::Mod10;

/// Numbering schemes of the Swedish banks.
///
/// https://www.bankgirot.se/globalassets/dokument/anvandarmanualer/bankernaskontonummeruppbyggnad_anvandarmanual_sv.pdf
///
/// Order matters: ranges overlap and the first matching entry wins.
pub fn builtin_bank_table() -> Vec<BankSpecConfig> {
    use Comment::{One, Three, Two};

    vec![
        BankSpecConfig::type1("Svea Bank", "^966[0-9]{8}$", Two),
        BankSpecConfig::type1("Avanza Bank", "^95[5-6][0-9]{8}$", Two),
        BankSpecConfig::type1("BlueStep Finans", "^968[0-9]{8}$", One),
        BankSpecConfig::type1("BNP Paribas SA", "^947[0-9]{8}$", Two),
        BankSpecConfig::type1("Danske Bank", "^1[2-3][0-9][0-9]{8}$", One),
        BankSpecConfig::type1("Danske Bank", "^24[0-9][0-9]{8}$", One),
        BankSpecConfig::type1("DNB Bank", "^(919|926)[0-9]{8}$", Two),
        BankSpecConfig::type1("Ekobanken", "^970[0-9]{8}$", Two),
        BankSpecConfig::type1("Erik Penser", "^959[0-9]{8}$", Two),
        BankSpecConfig::type1("Forex Bank", "^94[0-4][0-9]{8}$", One),
        BankSpecConfig::type1("Ica Banken", "^927[0-9]{8}$", One),
        BankSpecConfig::type1("IKANO Bank", "^917[0-9]{8}$", One),
        BankSpecConfig::type1("JAK Medlemsbank", "^967[0-9]{8}$", Two),
        BankSpecConfig::type1("Klarna Bank", "^978[0-9]{8}$", Two),
        BankSpecConfig::type1("Landshypotek", "^939[0-9]{8}$", Two),
        BankSpecConfig::type1("Lån & Spar Bank Sverige", "^963[0-9]{8}$", One),
        BankSpecConfig::type1("Länsförsäkringar Bank", "^(340|906)[0-9]{8}$", One),
        BankSpecConfig::type1("Länsförsäkringar Bank", "^902[0-9]{8}$", Two),
        BankSpecConfig::type1("Marginalen Bank", "^923[0-9]{8}$", One),
        BankSpecConfig::type1("MedMera Bank", "^965[0-9]{8}$", Two),
        BankSpecConfig::type1("Nordax Bank", "^964[0-9]{8}$", Two),
        BankSpecConfig::type1("Nordea", "^11[0-9]{9}$", One),
        // The Nordea patterns below are only anchored at the start
        BankSpecConfig::type1("Nordea", "^(1[4-9][0-9]{9}|20[0-9]{9})", One),
        // 3300 and 3782 are personal accounts, see "Nordea Personkonto"
        BankSpecConfig::type1("Nordea", "^(3[0-3][0-9]{9})", One).excluded_prefixes(&["3300"]),
        BankSpecConfig::type1("Nordea", "^(3[4-9][1-9][0-9]{8})", One)
            .excluded_prefixes(&["3782"]),
        BankSpecConfig::type1("Nordea", "^4[0-9]{10}", Two),
        BankSpecConfig::type1("Nordnet Bank", "^910[0-9]{8}$", Two),
        BankSpecConfig::type1("Northmill Bank", "^975[0-9]{8}$", Two),
        BankSpecConfig::type1("Resurs Bank", "^928[0-9]{8}$", One),
        BankSpecConfig::type1("Riksgälden", "^988[0-9]{8}$", Two),
        BankSpecConfig::type1("Santander Consumer Bank", "^946[0-9]{8}$", One),
        BankSpecConfig::type1("SBAB", "^925[0-9]{8}$", One),
        BankSpecConfig::type1("SEB", "^5[0-9]{10}$", One),
        BankSpecConfig::type1("SEB", "^912[0-4][0-9]{7}$", One),
        BankSpecConfig::type1("SEB", "^91[3-4][0-9]{8}$", One),
        BankSpecConfig::type1("Skandiabanken", "^91[5-6][0-9]{8}$", Two),
        BankSpecConfig::type1("Swedbank", "^7[0-9]{10}$", One),
        BankSpecConfig::type1("Ålandsbanken Sverige AB", "^23[0-9]{9}$", Two),
        BankSpecConfig::type2("Danske Bank", "^918[0-9]{11}$", One).algorithm(Mod10),
        BankSpecConfig::type2("Handelsbanken", "^6[0-9]{12}$", Two),
        BankSpecConfig::type2("Nordea/Plusgirot", "^(95[0-4]|996)[0-9]{8,11}$", Three)
            .algorithm(Mod10),
        BankSpecConfig::type2("Nordea Personkonto", "^(3300|3782)[0-9]{10}$", One)
            .algorithm(Mod10),
        BankSpecConfig::type2("Riksgälden", "^989[0-9]{11}$", One).algorithm(Mod10),
        BankSpecConfig::type2("Sparbanken Syd", "^957[0-9]{11}$", One).algorithm(Mod10),
        BankSpecConfig::type2("Swedbank", "^8[0-9]{10,14}$", Three)
            .algorithm(Mod10)
            .clearing_length(5),
        BankSpecConfig::type2("Swedbank fd. Sparbanken Öresund", "^93[0-4][0-9]{11}$", One)
            .algorithm(Mod10),
        // Bankgirot isn't part of the bank giro centre's own documentation
        BankSpecConfig::new("Bankgirot", "^9900[0-9]{7,8}$").algorithm(Mod10),
    ]
}
