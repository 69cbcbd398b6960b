#[cfg(test)]
mod sample_catalog {
    use std::path::Path;

    use propcompare::{
        catalog::Catalog, models::property::PropertyType, pricing::formula::FormulaModel,
    };

    fn catalog() -> Catalog {
        Catalog::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("data")).unwrap()
    }

    #[test]
    fn loads_every_basic_record() {
        let catalog = catalog();
        let ids: Vec<u32> = catalog.all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn derives_model_fields() {
        let catalog = catalog();

        let downtown = catalog.get(1).unwrap();
        assert_eq!(downtown.property_type, PropertyType::Condo);
        assert_eq!(downtown.building_area, 1500);
        assert_eq!(downtown.year_built, 1988);
        assert!(downtown.has_pool);
        assert!(downtown.has_garage);
        assert_eq!(downtown.school_rating, 8);

        let bungalow = catalog.get(4).unwrap();
        assert_eq!(bungalow.listed_price, 615000);
        assert_eq!(bungalow.property_type, PropertyType::Sfh);
        assert_eq!(bungalow.lot_area, 1850);
        assert_eq!(bungalow.year_built, 2002);
        assert!(bungalow.has_garage);
    }

    #[test]
    fn missing_features_fall_back() {
        let cottage = catalog().get(7).cloned().unwrap();
        assert_eq!(cottage.size_sqft, 1000);
        assert_eq!(cottage.bedrooms, 2);
        assert_eq!(cottage.image_url, "");
        assert_eq!(cottage.school_rating, 6);
    }

    #[test]
    fn catalog_prices() {
        let catalog = catalog();
        let model = FormulaModel::default();
        let expected = [
            (1, 681700.0),
            (2, 530400.0),
            (3, 457700.0),
            (4, 398500.0),
            (5, 494000.0),
            (6, 472900.0),
            (7, 269400.0),
        ];
        for (id, price) in expected {
            let input = catalog.get(id).unwrap().model_input();
            assert_eq!(model.price(&input), price, "property {id}");
        }
    }

    #[test]
    fn search_matches_title_and_location() {
        let catalog = catalog();
        let ids = |q: &str| catalog.search(q).iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids("condo"), vec![2]);
        assert_eq!(ids(" CA "), vec![3, 5]);
        assert_eq!(ids("").len(), 7);
        assert!(ids("atlantis").is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(Catalog::load(Path::new("/definitely/not/here")).is_err());
    }
}
