//! Rendering scenarios through the public facade.

#[cfg(test)]
mod tests {
    use appacitive_query::{
        CompareOp, Field, FieldValue, LogicalMode, Membership, MembershipMode, Query, field,
    };

    use crate::init_tracing;

    #[test]
    fn test_should_render_age_comparison() -> anyhow::Result<()> {
        init_tracing();
        let q = Query::comparison(Field::new("age")?, CompareOp::Ge, FieldValue::integer(18));
        assert_eq!(q.render(), "age >= 18");
        Ok(())
    }

    #[test]
    fn test_should_render_city_membership() -> anyhow::Result<()> {
        let q = Query::Membership(Membership::from_strings(
            Field::new("city")?,
            MembershipMode::In,
            ["NY", "LA"],
        )?);
        assert_eq!(q.render(), "city in 'NY','LA'");
        Ok(())
    }

    #[test]
    fn test_should_render_negated_status() -> anyhow::Result<()> {
        let status = Query::comparison(
            Field::new("status")?,
            CompareOp::Eq,
            FieldValue::string("active"),
        );
        let q = Query::logical(LogicalMode::Not, [status])?;
        assert_eq!(q.render(), "not (status = 'active')");
        Ok(())
    }

    #[test]
    fn test_should_render_not_in_for_integer_sequences() -> anyhow::Result<()> {
        let sequences: [&[i32]; 4] = [&[1], &[5, 4, 3], &[7, 7, 7], &[-1, 0, i32::MAX]];
        for seq in sequences {
            let q = Membership::from_integers(Field::new("f")?, MembershipMode::NotIn, seq.to_vec())?;
            let expected = format!(
                "f not in {}",
                seq.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
            );
            assert_eq!(q.to_string(), expected);
        }
        Ok(())
    }

    #[test]
    fn test_should_render_identical_trees_identically() -> anyhow::Result<()> {
        let build = || -> anyhow::Result<Query> {
            Ok(field("a")?.equal_to(1)?.or(field("b")?.is_in(["x", "y"])?))
        };
        assert_eq!(build()?.render(), build()?.render());
        assert_eq!(build()?, build()?);
        Ok(())
    }

    #[test]
    fn test_should_parenthesize_mixed_nesting() -> anyhow::Result<()> {
        let a = field("a")?.equal_to(1)?;
        let b = field("b")?.between(1, 5)?;
        let c = field("c")?.not_in(["z"])?;
        let q = Query::all([a.or(b).negate(), c])?;
        assert_eq!(
            q.render(),
            "(not ((a = 1) or (b between 1,5))) and (c not in 'z')"
        );
        Ok(())
    }

    #[test]
    fn test_should_share_tree_across_threads() -> anyhow::Result<()> {
        let q = std::sync::Arc::new(field("age")?.greater_than(18)?.and(field("vip")?.equal_to(true)?));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let q = std::sync::Arc::clone(&q);
                std::thread::spawn(move || q.render())
            })
            .collect();
        for handle in handles {
            let rendered = handle.join().map_err(|_| anyhow::anyhow!("render thread panicked"))?;
            assert_eq!(rendered, "(age > 18) and (vip = true)");
        }
        Ok(())
    }

    #[test]
    fn test_should_fail_construction_before_rendering() {
        assert!(field("").is_err());
        assert!(field("tags").and_then(|f| f.is_in(Vec::<String>::new())).is_err());
        assert!(Query::any(Vec::<Query>::new()).is_err());
        assert!("age > 18".parse::<Query>().is_err());
    }
}
