use crate::core::model::{Challenge, Exercise, Lesson, Section, SubSection};

pub static CSHARP_OOP: Section = Section {
    title: "Object-Oriented C#",
    description: "Classes, records, interfaces and inheritance, and when to reach for each.",
    lessons: &[
        Lesson {
            title: "Classes and Properties",
            description: "Modelling data and behaviour together.",
            sections: &[
                SubSection {
                    title: "Fields, properties and constructors",
                    explanation: "<p>Expose state through <strong>properties</strong>, not public fields. An <code>init</code> accessor allows a value to be set during construction only. Primary constructors capture parameters for the whole class body.</p>",
                    code_example: Some(
                        r#"public class Account(string owner)
{
    public string Owner { get; } = owner;
    public decimal Balance { get; private set; }

    public void Deposit(decimal amount)
    {
        if (amount <= 0) throw new ArgumentOutOfRangeException(nameof(amount));
        Balance += amount;
    }
}"#,
                    ),
                },
                SubSection {
                    title: "Encapsulation",
                    explanation: "<p>Keep invariants inside the type. Callers of <code>Account</code> cannot set <code>Balance</code> directly, so a negative deposit can never slip through.</p><p>Prefer <code>private</code> by default and widen access only when a caller needs it.</p>",
                    code_example: None,
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Add a Withdraw method to Account that refuses to overdraw and returns a bool indicating success.",
            }),
        },
        Lesson {
            title: "Records and Value Equality",
            description: "Immutable data types with equality built in.",
            sections: &[
                SubSection {
                    title: "Declaring records",
                    explanation: "<p>A <code>record</code> compares by value: two records with equal properties are equal. Positional records generate a constructor, properties and deconstruction in one line.</p>",
                    code_example: Some(
                        r#"public record Point(int X, int Y);

var a = new Point(1, 2);
var b = new Point(1, 2);
Console.WriteLine(a == b);   // True"#,
                    ),
                },
                SubSection {
                    title: "Non-destructive mutation",
                    explanation: "<p>Records are usually immutable. The <code>with</code> expression copies a record and changes selected properties, leaving the original untouched.</p>",
                    code_example: Some(
                        r#"var moved = a with { X = 10 };
Console.WriteLine(a);      // Point { X = 1, Y = 2 }
Console.WriteLine(moved);  // Point { X = 10, Y = 2 }"#,
                    ),
                },
            ],
            code_example: None,
            exercise: None,
        },
        Lesson {
            title: "Interfaces and Inheritance",
            description: "Polymorphism through contracts and base classes.",
            sections: &[
                SubSection {
                    title: "Interfaces",
                    explanation: "<p>An interface names a capability without saying how it is implemented. Code that depends on <code>INotifier</code> works with any notifier, which makes it easy to swap in a fake during tests.</p>",
                    code_example: Some(
                        r#"public interface INotifier
{
    Task SendAsync(string to, string message);
}

public class EmailNotifier : INotifier
{
    public Task SendAsync(string to, string message) =>
        Console.Out.WriteLineAsync($"mail {to}: {message}");
}"#,
                    ),
                },
                SubSection {
                    title: "Abstract and virtual members",
                    explanation: "<p>A base class can supply shared behaviour and leave hooks for subclasses. <code>abstract</code> members must be overridden; <code>virtual</code> members may be. Mark classes <code>sealed</code> when they are not designed for inheritance.</p>",
                    code_example: Some(
                        r#"public abstract class Shape
{
    public abstract double Area();
    public override string ToString() => $"{GetType().Name} ({Area():F2})";
}

public sealed class Circle(double r) : Shape
{
    public override double Area() => Math.PI * r * r;
}"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Add a Rectangle shape and print the total area of a List<Shape> containing circles and rectangles.",
            }),
        },
    ],
    challenge: Some(Challenge {
        description: "Model a small library system with books, members and loans.",
        requirements: &[
            "Use a record for Book with Isbn, Title and Author",
            "Members can borrow at most three books at a time",
            "Borrowing an already loaned book returns a failure result instead of throwing",
            "Depend on an IClock interface so due dates can be tested",
        ],
        starter_code: r#"public record Book(string Isbn, string Title, string Author);

public interface IClock
{
    DateTime Now { get; }
}

public class Library
{
    // TODO
}"#,
    }),
};
