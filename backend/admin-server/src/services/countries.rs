use common_utils::CustomResult;
use domain_types::{errors::ProviderError, payment_methods::Country};
use interfaces::api::CountryService;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCountryService {
    countries: Vec<Country>,
}

impl InMemoryCountryService {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

impl CountryService for InMemoryCountryService {
    fn get_all_countries(&self, show_hidden: bool) -> CustomResult<Vec<Country>, ProviderError> {
        Ok(self
            .countries
            .iter()
            .filter(|country| show_hidden || country.published)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use domain_types::payment_methods::CountryId;

    use super::*;

    #[test]
    fn hidden_countries_are_only_listed_on_request() {
        let service = InMemoryCountryService::new(vec![
            Country {
                id: CountryId(1),
                name: "Germany".to_string(),
                published: true,
            },
            Country {
                id: CountryId(2),
                name: "Atlantis".to_string(),
                published: false,
            },
        ]);

        assert_eq!(service.get_all_countries(false).unwrap().len(), 1);
        assert_eq!(service.get_all_countries(true).unwrap().len(), 2);
    }
}
