/// Hands out increasing tickets for list requests so that a response is only
/// applied if no newer request was started after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchGeneration {
	latest: u64,
}

impl FetchGeneration {
	pub fn start(&mut self) -> u64 {
		self.latest += 1;
		self.latest
	}

	pub fn is_current(&self, ticket: u64) -> bool {
		ticket == self.latest
	}
}
