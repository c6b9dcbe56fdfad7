// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.courtauction.go.kr";
pub const SEARCH_FORM_PATH: &str = "/InitMulSrch.laf";
pub const FORM_RESULT_PATH: &str = "/RetrieveRealEstMulDetailList.laf";
pub const JSON_SEARCH_PATH: &str = "/pgj/pgjsearch/searchControllerMain.on";
pub const JSON_SUBMISSION_ID: &str = "mf_wfm_mainFrame_sbm_selectGdsDtlSrch";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Browser automation
pub const INDEX_FRAME_ID: &str = "indexFrame";
pub const QUICK_SEARCH_LINK: &str = "#qk_srch_link_1 > a";
pub const SEARCH_BUTTON_XPATH: &str = r#"//*[@id="contents"]/form/div[2]/a[1]/img"#;
pub const BROWSER_WAIT_SECS: u64 = 10;

// Extraction markers
pub const RESULTS_TABLE_CLASS: &str = "Ltbl_list";
pub const JSON_RESULT_PATH: &str = "data.dlt_srchResult";

// First result page only
pub const PAGE_SIZE: u32 = 40;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "listings";
