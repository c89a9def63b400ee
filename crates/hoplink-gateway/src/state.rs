use std::sync::Arc;

use hoplink_redirector::Redirector;
use hoplink_shortener::Creator;

#[derive(Clone)]
pub struct AppState {
    creator: Arc<dyn Creator>,
    redirector: Arc<dyn Redirector>,
}

impl AppState {
    pub fn new(creator: Arc<dyn Creator>, redirector: Arc<dyn Redirector>) -> Self {
        Self {
            creator,
            redirector,
        }
    }

    pub fn creator(&self) -> &dyn Creator {
        self.creator.as_ref()
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }
}
