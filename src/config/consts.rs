// src/config/consts.rs

// Provenance shared by every site
pub const COUNTRY: &str = "Malaysia";
pub const TOPIC_FRAUD_SC: &str = "fraud";
pub const TOPIC_FRAUD_BNM: &str = "Fraud";

// Securities Commission
pub const SC_NAME: &str = "Suruhanjaya Sekuriti Securities commission malaysia";
pub const SC_AOB_SANCTIONS_URL: &str = "https://www.sc.com.my/aob/aobs-sanctions";
pub const SC_ENFORCEMENT_URL: &str = "https://www.sc.com.my/regulation/enforcement/actions";

// Bank Negara Malaysia
pub const BNM_NAME: &str = "Bank Negara Malaysia";
pub const BNM_ALERT_LIST_URL: &str = "https://www.bnm.gov.my/financial-consumer-alert-list";
pub const BNM_COURT_ORDERS_URL: &str = "https://www.bnm.gov.my/enforcement-actions/court-orders";
pub const BNM_NOTICE_URL: &str = "https://www.bnm.gov.my/-/ea-pn-20230901";

// Royal Malaysia Police
pub const RMP_WANTED_URL: &str = "https://www.rmp.gov.my/orang-dikehendaki";

// Table widths (logical columns) per page
pub const AOB_SANCTIONS_WIDTH: usize = 6;
pub const COMPOUND_CASES_WIDTH: usize = 5;
pub const COURT_ORDERS_WIDTH: usize = 5;
pub const FINANCIAL_SERVICES_WIDTH: usize = 5;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// Logging
pub const LOG_ENV: &str = "REG_SCRAPE_LOG";
pub const LOG_DEFAULT_FILTER: &str = "info";
