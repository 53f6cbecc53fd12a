pub mod board;
pub mod feed;
pub mod record;

pub use board::{MarketBoard, RequestTicket, SortOrder, FETCH_FAILED_MESSAGE};
pub use feed::{
    decode_response, DataGovInFeed, MarketError, PriceFeedConfig, PriceQuery, PriceSource,
};
pub use record::{clean_records, parse_price, FeedResponse, PriceRecord, RawPriceRecord};
