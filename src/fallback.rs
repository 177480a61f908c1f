//! Fallback Catalog
//!
//! Fixed 12-plant catalog used when the remote gateway fails or returns an
//! empty list. Covers every category the classifier knows about, so the
//! category sidebar stays useful offline.

use crate::models::{Plant, PlantId};

fn plant(
    id: u32,
    name: &str,
    price: &str,
    category: &str,
    short_description: &str,
    description: &str,
    image: &str,
) -> Plant {
    Plant {
        id: PlantId::new(id.to_string()),
        plant_name: Some(name.to_string()),
        name: None,
        price: Some(price.to_string()),
        short_description: Some(short_description.to_string()),
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        image: Some(image.to_string()),
        life_span: None,
        native_region: None,
        water_needs: None,
    }
}

pub fn fallback_plants() -> Vec<Plant> {
    vec![
        plant(
            1,
            "Mango Tree",
            "300",
            "Fruit Trees",
            "A fast-growing tropical tree that produces delicious, juicy mangoes during summer. Ideal for tropical climates.",
            "The mango tree is a tropical tree that produces the mango fruit. It can grow up to 35-40 meters tall. The tree is long-lived, with some specimens known to be over 300 years old and still producing fruit.",
            "https://images.unsplash.com/photo-1592924357228-91a4daadcfea?w=400&h=300&fit=crop",
        ),
        plant(
            2,
            "Apple Tree",
            "250",
            "Fruit Trees",
            "Produces sweet and crisp apples. Perfect for temperate climates and home gardens.",
            "Apple trees are deciduous trees in the rose family best known for their sweet, pomaceous fruit. They are cultivated worldwide.",
            "https://images.unsplash.com/photo-1568702846914-96b305d2aaeb?w=400&h=300&fit=crop",
        ),
        plant(
            3,
            "Rose Plant",
            "150",
            "Flowering Trees",
            "Beautiful flowering plant with fragrant roses in various colors. Perfect for gardens.",
            "Roses are woody perennial flowering plants with over three hundred species and tens of thousands of cultivars.",
            "https://images.unsplash.com/photo-1562690868-60bbe7293e94?w=400&h=300&fit=crop",
        ),
        plant(
            4,
            "Oak Tree",
            "500",
            "Shade Trees",
            "Large, sturdy tree that provides excellent shade and grows for centuries.",
            "Oak trees are known for their strength and longevity. They can live for hundreds of years and provide habitat for many species.",
            "https://images.unsplash.com/photo-1596461404969-9ae70f2830c1?w=400&h=300&fit=crop",
        ),
        plant(
            5,
            "Neem Tree",
            "200",
            "Medicinal Trees",
            "Known for its medicinal properties and air purification capabilities.",
            "Neem tree is known for its medicinal properties. Every part of the tree is used in traditional medicine.",
            "https://images.unsplash.com/photo-1589923186741-b7d59d6b2c4a?w=400&h=300&fit=crop",
        ),
        plant(
            6,
            "Teak Tree",
            "450",
            "Timber Trees",
            "Premium timber tree known for its durability and water resistance.",
            "Teak is a tropical hardwood tree species in the family Lamiaceae. It is known for its high quality timber.",
            "https://images.unsplash.com/photo-1513836279014-a89f7a76ae86?w=400&h=300&fit=crop",
        ),
        plant(
            7,
            "Pine Tree",
            "350",
            "Evergreen Trees",
            "Evergreen tree that stays green throughout the year.",
            "Pine trees are evergreen, coniferous resinous trees in the genus Pinus. They are found throughout the world.",
            "https://images.unsplash.com/photo-1601918774946-25832a4be0d6?w=400&h=300&fit=crop",
        ),
        plant(
            8,
            "Bonsai Tree",
            "180",
            "Ornamental Plants",
            "Ornamental miniature tree grown in containers.",
            "Bonsai is a Japanese art form using cultivation techniques to produce small trees in containers.",
            "https://images.unsplash.com/photo-1610557892470-55d9e80c0bce?w=400&h=300&fit=crop",
        ),
        plant(
            9,
            "Bamboo",
            "120",
            "Bamboo",
            "Fast-growing plant that's both decorative and useful.",
            "Bamboo is a group of woody perennial grasses. It is one of the fastest-growing plants in the world.",
            "https://images.unsplash.com/photo-1528164344705-47542687000d?w=400&h=300&fit=crop",
        ),
        plant(
            10,
            "Ivy Plant",
            "90",
            "Climbers",
            "Climbing plant that adds greenery to walls and fences.",
            "Ivy is a genus of 12-15 species of evergreen climbing or ground-creeping woody plants.",
            "https://images.unsplash.com/photo-1562690868-60bbe7293e94?w=400&h=300&fit=crop",
        ),
        plant(
            11,
            "Water Lily",
            "110",
            "Aquatic Plants",
            "Aquatic plant with beautiful floating flowers.",
            "Water lilies are aquatic plants with large, round leaves that float on the water surface.",
            "https://images.unsplash.com/photo-1525268323446-0505b6fe7778?w=400&h=300&fit=crop",
        ),
        plant(
            12,
            "Orange Tree",
            "280",
            "Fruit Trees",
            "Citrus tree that produces sweet oranges. Perfect for sunny locations.",
            "Orange trees are citrus trees with sweet, juicy fruits. They thrive in warm climates.",
            "https://images.unsplash.com/photo-1547514701-42782101795e?w=400&h=300&fit=crop",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;

    #[test]
    fn test_twelve_plants() {
        assert_eq!(fallback_plants().len(), 12);
    }

    #[test]
    fn test_ids_are_unique() {
        let plants = fallback_plants();
        for (i, a) in plants.iter().enumerate() {
            for b in &plants[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_every_category_rule_has_a_match() {
        // The fallback catalog must exercise every classifier branch with a
        // genuine match (i.e. filtering never falls back to the full list).
        let plants = fallback_plants();
        for label in [
            "Fruit Trees",
            "Flowering Trees",
            "Shade Trees",
            "Medicinal Trees",
            "Timber Trees",
            "Evergreen Trees",
            "Ornamental Plants",
            "Bamboo",
            "Climbers",
            "Aquatic Plants",
        ] {
            let filtered = classify::filter_by_label(&plants, label);
            assert!(
                filtered.len() < plants.len(),
                "label {label:?} matched nothing and fell back to the full catalog"
            );
            assert!(!filtered.is_empty());
        }
    }
}
