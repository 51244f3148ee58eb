use crate::core::model::{Challenge, Exercise, Lesson, Section, SubSection};

pub static CSHARP_ASYNC_WEB: Section = Section {
    title: "Async C# and ASP.NET Core",
    description: "Asynchronous programming with async/await and building HTTP APIs with ASP.NET Core.",
    lessons: &[
        Lesson {
            title: "async and await",
            description: "Writing non-blocking code that still reads top to bottom.",
            sections: &[
                SubSection {
                    title: "Tasks",
                    explanation: "<p>A <code>Task</code> represents work that completes later. <code>await</code> suspends the method until the task finishes without blocking the thread. Async methods return <code>Task</code> or <code>Task&lt;T&gt;</code>, never <code>void</code> outside event handlers.</p>",
                    code_example: Some(
                        r#"static async Task<string> FetchTitleAsync(HttpClient http, string url)
{
    var html = await http.GetStringAsync(url);
    var start = html.IndexOf("<title>") + 7;
    var end = html.IndexOf("</title>");
    return html[start..end];
}"#,
                    ),
                },
                SubSection {
                    title: "Running work concurrently",
                    explanation: "<p>Start several tasks first, then await them together with <code>Task.WhenAll</code>. Awaiting each one in a loop runs them one after another.</p>",
                    code_example: Some(
                        r#"var tasks = urls.Select(u => FetchTitleAsync(http, u));
string[] titles = await Task.WhenAll(tasks);"#,
                    ),
                },
                SubSection {
                    title: "Cancellation",
                    explanation: "<p>Pass a <code>CancellationToken</code> down through every async call. Libraries throw <code>OperationCanceledException</code> when the token fires.</p>",
                    code_example: Some(
                        r#"using var cts = new CancellationTokenSource(TimeSpan.FromSeconds(5));
var body = await http.GetStringAsync(url, cts.Token);"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Download three URLs concurrently with a 2 second timeout and print which ones finished in time.",
            }),
        },
        Lesson {
            title: "Minimal APIs",
            description: "Mapping HTTP routes to handlers in ASP.NET Core.",
            sections: &[
                SubSection {
                    title: "Routes and handlers",
                    explanation: "<p>Minimal APIs map an HTTP verb and route template to a lambda. Route values, query strings and JSON bodies bind to handler parameters by name and type.</p>",
                    code_example: Some(
                        r#"var builder = WebApplication.CreateBuilder(args);
var app = builder.Build();

app.MapGet("/todos/{id:int}", (int id, TodoStore store) =>
    store.Find(id) is { } todo ? Results.Ok(todo) : Results.NotFound());

app.MapPost("/todos", (Todo todo, TodoStore store) =>
{
    store.Add(todo);
    return Results.Created($"/todos/{todo.Id}", todo);
});

app.Run();"#,
                    ),
                },
                SubSection {
                    title: "Dependency injection",
                    explanation: "<p>Register services on <code>builder.Services</code> with a lifetime: <em>singleton</em>, <em>scoped</em> (one per request) or <em>transient</em>. Handlers receive them as parameters.</p>",
                    code_example: Some(
                        r#"builder.Services.AddSingleton<TodoStore>();
builder.Services.AddScoped<INotifier, EmailNotifier>();"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Add PUT and DELETE endpoints to the todo API, returning 404 when the id does not exist.",
            }),
        },
        Lesson {
            title: "Validation and Errors",
            description: "Returning consistent problem responses.",
            sections: &[
                SubSection {
                    title: "Problem details",
                    explanation: "<p>ASP.NET Core can describe failures with RFC 7807 <strong>problem details</strong>. Return <code>Results.ValidationProblem</code> with a dictionary of field errors so clients can display them next to inputs.</p>",
                    code_example: Some(
                        r#"app.MapPost("/todos", (Todo todo, TodoStore store) =>
{
    if (string.IsNullOrWhiteSpace(todo.Title))
    {
        return Results.ValidationProblem(new Dictionary<string, string[]>
        {
            ["title"] = new[] { "Title is required." },
        });
    }
    store.Add(todo);
    return Results.Created($"/todos/{todo.Id}", todo);
});"#,
                    ),
                },
            ],
            code_example: None,
            exercise: None,
        },
    ],
    challenge: Some(Challenge {
        description: "Build a bookmarks API with ASP.NET Core minimal APIs.",
        requirements: &[
            "GET /bookmarks returns all bookmarks, optionally filtered by ?tag=",
            "POST /bookmarks validates that the URL is absolute",
            "DELETE /bookmarks/{id} returns 204 or 404",
            "Store bookmarks in a singleton service behind an interface",
        ],
        starter_code: r#"var builder = WebApplication.CreateBuilder(args);
// TODO: register services

var app = builder.Build();
// TODO: map endpoints

app.Run();

public record Bookmark(int Id, string Url, string[] Tags);"#,
    }),
};
