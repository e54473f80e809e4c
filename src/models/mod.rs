mod advisor;
mod client;
mod event;
mod market;
mod share;

pub use advisor::{Advisor, AdvisorProfile, CreateAdvisor};
pub use client::{Client, ClientDetails, CreateClient, UpdateClient};
pub use event::{CreateEvent, Event, EventWithNote, MeetingNote, PutMeetingNote};
pub use market::{CreateMarket, CreateStock, Market, Stock, StockListing};
pub use share::{CashReceipt, CashRequest, Holding, Share, Side, TradeReceipt, TradeRequest};
